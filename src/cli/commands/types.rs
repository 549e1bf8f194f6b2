use crate::errors::AppResult;
use crate::models::ProcessType;

pub fn handle() -> AppResult<()> {
    for t in ProcessType::ALL {
        println!("{:<24} {}", t.label(), t.slug());
    }
    Ok(())
}
