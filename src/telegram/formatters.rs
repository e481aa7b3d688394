//! Message formatting
//!
//! All reply text lives here, separated from sending so it is testable
//! without a live bot. Every entry in a returned list goes out as its own
//! chat message; callers must not merge them.

use crate::errors::{BotError, BotResult};
use crate::settlements::Commodity;
use std::collections::BTreeSet;

/// Fixed /start manual, one message per line
pub const HELP_LINES: [&str; 3] = [
    "Você pode digitar /listar para listar todos as mercadorias ou ...",
    "digitar /info CODIGOVENCIMENTO  para obter o valor.",
    "exemplo:  /info VALEOG20",
];

pub const LIST_HEADER: &str = "A lista de mercadorias é:";

pub const USAGE_HINT: &str =
    "Código inválido. Use /info CODIGOVENCIMENTO, exemplo: /info VALEOG20";

pub const FETCH_FAILURE: &str =
    "Não foi possível obter os dados de ajuste agora. Tente novamente mais tarde.";

/// Distinct commodity names, lexicographically sorted
pub fn distinct_sorted_names(snapshot: &[Commodity]) -> Vec<String> {
    let names: BTreeSet<&str> = snapshot.iter().map(|c| c.name.as_str()).collect();
    names.into_iter().map(str::to_string).collect()
}

/// Split a lookup code into acronym and due-date portions
///
/// The due date is the fixed-width 3-character suffix; anything shorter
/// than 4 characters cannot carry both parts and is rejected.
pub fn split_info_code(code: &str) -> BotResult<(&str, &str)> {
    let chars = code.chars().count();
    if chars < 4 {
        return Err(BotError::UserInput(format!(
            "lookup code too short: '{}'",
            code
        )));
    }

    let (split_at, _) = code
        .char_indices()
        .nth(chars - 3)
        .ok_or_else(|| BotError::UserInput(format!("lookup code too short: '{}'", code)))?;

    Ok((&code[..split_at], &code[split_at..]))
}

/// Detail reply for one matching contract, one message per field
pub fn detail_lines(commodity: &Commodity) -> Vec<String> {
    vec![
        format!("Mercadoria: {} 🚀", commodity.name),
        format!("Vencimento: {}", commodity.due_date),
        format!(
            "Preço de ajuste anterior: {}",
            commodity.previous_adjustment_price
        ),
        format!(
            "Preço de ajuste Atual: {}",
            commodity.current_adjustment_price
        ),
        format!("Variação: {}", commodity.variation),
        format!(
            "Valor do ajuste por contrato (R$): {}",
            commodity.contract_adjustment_amount
        ),
    ]
}

pub fn not_found_message(acronym: &str, due_date: &str) -> String {
    format!(
        "Não foi encontrado mercadoria com o código: {} e vencimento {}",
        acronym, due_date
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commodity(name: &str, due: &str) -> Commodity {
        Commodity::new(
            name.to_string(),
            due.to_string(),
            "61.727,69".to_string(),
            "62.190,75".to_string(),
            "463,06".to_string(),
            "231,53".to_string(),
        )
    }

    #[test]
    fn test_distinct_sorted_names() {
        let snapshot = vec![
            commodity("B-X21", "X21"),
            commodity("A-X21", "X21"),
            commodity("A-X22", "X22"),
            commodity("A-X21", "X23"),
        ];

        assert_eq!(
            distinct_sorted_names(&snapshot),
            vec!["A-X21", "A-X22", "B-X21"]
        );
    }

    #[test]
    fn test_split_info_code() {
        assert_eq!(split_info_code("AOG20").unwrap(), ("AO", "G20"));
        assert_eq!(split_info_code("VALEOG20").unwrap(), ("VALEO", "G20"));
        assert_eq!(split_info_code("XG20").unwrap(), ("X", "G20"));
    }

    #[test]
    fn test_split_info_code_rejects_short_codes() {
        for code in ["", "G", "20", "G20"] {
            let err = split_info_code(code).unwrap_err();
            assert!(matches!(err, BotError::UserInput(_)), "code: '{}'", code);
        }
    }

    #[test]
    fn test_detail_lines_order() {
        let lines = detail_lines(&commodity("AO-G20", "G20"));
        assert_eq!(
            lines,
            vec![
                "Mercadoria: AO-G20 🚀",
                "Vencimento: G20",
                "Preço de ajuste anterior: 61.727,69",
                "Preço de ajuste Atual: 62.190,75",
                "Variação: 463,06",
                "Valor do ajuste por contrato (R$): 231,53",
            ]
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            not_found_message("XX", "G20"),
            "Não foi encontrado mercadoria com o código: XX e vencimento G20"
        );
    }
}
