//! TypeScript type generation module.
//!
//! Writes `.ts` definitions of the API's JSON types for the frontend when the
//! test suite runs.

#[cfg(test)]
mod tests {
    use std::{env, path::Path};

    use ts_rs::TS;

    #[test]
    fn generate_typescript_types() {
        // ACTIVITIES_TS_OUTPUT_DIR wins, otherwise ../ts-bindings
        let output_dir_str =
            env::var("ACTIVITIES_TS_OUTPUT_DIR").unwrap_or_else(|_| "../ts-bindings".to_string());
        let output_dir = Path::new(&output_dir_str);

        if !output_dir.exists() {
            std::fs::create_dir_all(output_dir).expect("Failed to create output directory");
        }

        // Drop stale definitions of renamed or removed types
        for entry in std::fs::read_dir(output_dir).expect("Failed to read output directory") {
            let path = entry.expect("Failed to read directory entry").path();
            if path.extension().and_then(|s| s.to_str()) == Some("ts") {
                std::fs::remove_file(&path).expect("Failed to remove stale TypeScript file");
            }
        }

        use crate::{
            api::{activity::ErrorResponse, status::HealthStatus},
            models::*,
        };

        Activity::export_all_to(output_dir).expect("Failed to export Activity type");
        MessageResponse::export_all_to(output_dir).expect("Failed to export MessageResponse type");
        ErrorResponse::export_all_to(output_dir).expect("Failed to export ErrorResponse type");
        HealthStatus::export_all_to(output_dir).expect("Failed to export HealthStatus type");

        assert!(output_dir.join("Activity.ts").exists());
        println!("TypeScript types generated successfully in {:?}", output_dir);
    }
}
