use crate::reports;
use anyhow::Context;
use clap::Args;
use solarscope::categories::CategoryStore;
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CategoriesArgs {
    /// Only show this category
    pub name: Option<String>,

    /// Preview a NAME,LAT,LNG[,CITY] file as the custom category
    #[arg(long, value_name = "FILE")]
    pub custom_csv: Option<PathBuf>,
}

pub fn run(args: CategoriesArgs) -> anyhow::Result<()> {
    let mut store = CategoryStore::with_builtins();
    if let Some(path) = &args.custom_csv {
        let file = File::open(path)
            .with_context(|| format!("Could not open custom locations '{}'", path.display()))?;
        store.import_custom_csv(file)?;
    }

    let names: Vec<String> = match &args.name {
        Some(name) => vec![name.clone()],
        None => store.names().into_iter().map(String::from).collect(),
    };

    for name in names {
        let category = store.get(&name)?;
        reports::print_category(&category);
    }
    Ok(())
}
