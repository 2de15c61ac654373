use gs_story::Content;

pub fn run() -> Result<(), String> {
    let content = Content::sample().map_err(|e| e.to_string())?;
    let json = content.to_json_pretty().map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
