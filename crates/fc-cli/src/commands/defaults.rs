use fc_core::CostModel;

pub fn run() -> Result<(), String> {
    let json = CostModel::default()
        .to_json_pretty()
        .map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
