use praias_core::error::PraiasError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), PraiasError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
