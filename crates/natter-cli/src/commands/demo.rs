use natter_core::demo_script;

pub fn run() -> Result<(), String> {
    let json = demo_script()
        .to_json_pretty()
        .map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
