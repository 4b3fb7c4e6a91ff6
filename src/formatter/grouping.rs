/// Insert `separator` into a string of ASCII digits
///
/// Standard grouping splits every 3 digits from the right. Indian grouping
/// keeps the rightmost 3 digits together and then splits every 2.
pub(super) fn insert_separators(digits: &str, separator: &str, indian: bool) -> String {
    let mut groups: Vec<&str> = Vec::with_capacity(digits.len() / 2 + 1);
    let mut end = digits.len();
    let mut size = 3;

    while end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
        if indian {
            size = 2;
        }
    }
    groups.push(&digits[..end]);

    groups.reverse();
    groups.join(separator)
}
