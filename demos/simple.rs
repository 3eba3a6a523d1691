use iniconf::Document;
use std::path::PathBuf;

const SAMPLE: &str = r#"; Example service configuration

[server]
host = localhost
port = 8080

[client]
; seconds
timeout = 30
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::parse(SAMPLE)?;
    println!("✅ Successfully parsed configuration!\n");

    println!("Sections: {:?}", doc.section_names());
    println!("Server port: {}", doc.get("server", "port").unwrap_or("<unset>"));

    doc.set("server", "port", "9090")?;
    doc.set("logging", "level", "debug")?;
    println!("Server port after mutation: {}", doc.get("server", "port").unwrap_or("<unset>"));

    let mut output_path = std::env::temp_dir();
    output_path.push("iniconf_example_modified.ini");
    doc.save_to_file(&output_path)?;

    let mut reloaded = Document::new();
    reloaded.load_from_file(PathBuf::from(&output_path))?;
    println!("\nSaved to {}:\n\n{}", output_path.display(), reloaded);

    Ok(())
}
