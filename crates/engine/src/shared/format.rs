/// Форматирует целое число с разделителями тысяч (запятыми)
///
/// # Примеры
/// ```
/// use engine::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(-4050), "-4,050");
/// ```
pub fn format_number(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Сумма в солях: "S/ 4,050.00"
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let units = (cents / 100) as i64;
    format!("S/ {}{}.{:02}", sign, format_number(units), cents % 100)
}
