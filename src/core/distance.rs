use crate::utils::error::{FreteError, Result};

/// Distance proxy between two CEPs: the absolute difference of their
/// two-digit region prefixes (CEP zone map). This is a deliberately crude
/// measure — every pair of codes sharing a leading region collapses to
/// distance 0 no matter how far apart they really are. Good enough to
/// spread the heuristic price table, nothing more.
///
/// Expects already-normalized codes (separators stripped by the caller).
pub fn estimate_distance(cep_origem: &str, cep_destino: &str) -> Result<u32> {
    let origem = leading_region(cep_origem)?;
    let destino = leading_region(cep_destino)?;
    Ok(origem.abs_diff(destino))
}

/// First two digits of the CEP as a region index; an empty code counts as
/// region 0.
fn leading_region(cep: &str) -> Result<u32> {
    if cep.is_empty() {
        return Ok(0);
    }

    let prefix: String = cep.chars().take(2).collect();
    prefix
        .parse::<u32>()
        .map_err(|_| FreteError::InvalidPostalCodeError {
            cep: cep.to_string(),
        })
}
