//! TypeScript type generation module.
//!
//! This module exports TypeScript type definitions for every JSON shape the
//! API returns. When this file is compiled (typically during testing), it
//! generates .ts files in the specified output directory.

#[cfg(test)]
mod tests {
    use std::{env, path::Path};

    use ts_rs::TS;

    #[test]
    fn generate_typescript_types() {
        // QUAKE_TS_OUTPUT_DIR wins; otherwise fall back to ../ts-bindings
        let output_dir_str =
            env::var("QUAKE_TS_OUTPUT_DIR").unwrap_or_else(|_| "../ts-bindings".to_string());
        let output_dir = Path::new(&output_dir_str);

        if !output_dir.exists() {
            std::fs::create_dir_all(output_dir).expect("Failed to create output directory");
        }

        // Clean up old TypeScript files so renamed types do not linger
        for entry in std::fs::read_dir(output_dir).expect("Failed to read output directory") {
            let path = entry.expect("Failed to read directory entry").path();
            if path.extension().and_then(|s| s.to_str()) == Some("ts") {
                std::fs::remove_file(&path)
                    .unwrap_or_else(|e| panic!("Failed to remove {:?}: {}", path, e));
            }
        }

        use crate::models::{Earthquake, EarthquakeList, MessageResponse};

        Earthquake::export_all_to(output_dir).expect("Failed to export Earthquake type");
        EarthquakeList::export_all_to(output_dir).expect("Failed to export EarthquakeList type");
        MessageResponse::export_all_to(output_dir)
            .expect("Failed to export MessageResponse type");

        assert!(output_dir.join("Earthquake.ts").exists());
        println!("TypeScript types generated successfully in {:?}", output_dir);
    }
}
