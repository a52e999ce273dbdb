use praias_core::error::PraiasError;
use std::path::Path;

pub fn print(file: &Path) -> Result<(), PraiasError> {
    let table = praias_core::coordinates::load_table(file)?;

    println!("{} monitoring point(s):\n", table.len());
    for (code, coords) in table.iter() {
        println!("  {:<4} {}", code, coords);
    }
    Ok(())
}
