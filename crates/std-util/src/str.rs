/// Uppercases the first character, leaving the rest untouched.
///
/// Unlike a full case conversion this keeps inner casing, so `balanceOf`
/// becomes `BalanceOf` rather than `Balanceof`.
pub fn capitalize(src: &str) -> String {
    let mut chars = src.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_keeps_inner_casing() {
        assert_eq!(capitalize("balanceOf"), "BalanceOf");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Already"), "Already");
    }
}
