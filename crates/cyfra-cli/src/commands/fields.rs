//! Fields command - list the output fields and their labels.

use console::style;

use super::load_config;

pub async fn run(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let schema = config.extraction.schema()?;

    let width = schema
        .fields()
        .iter()
        .map(|f| f.chars().count())
        .max()
        .unwrap_or(0);

    for field in schema.fields() {
        let labels: Vec<&str> = schema
            .labels()
            .iter()
            .filter(|rule| &rule.field == field)
            .flat_map(|rule| rule.labels.iter().map(String::as_str))
            .collect();

        if labels.is_empty() {
            println!("{:<width$}  {}", field, style("(derived)").dim(), width = width);
        } else {
            println!("{:<width$}  {}", field, labels.join(", "), width = width);
        }
    }

    Ok(())
}
