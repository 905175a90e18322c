//! Tolerant date parsing for the date-range filter.

/// Normalize a loosely formatted date to zero-padded `YYYY-MM-DD`.
///
/// Accepts a four-digit year, a separator (`-`, `.` or `/`, optionally
/// followed by one space), a one- or two-digit month, the same separator and
/// a one- or two-digit day. Anything after the day is ignored as long as it
/// does not continue the number, so `2024-03-05 09:00` and `2024. 3. 5.`
/// both parse. Returns `None` for anything else; callers treat that as
/// "cannot filter" rather than as an error.
///
/// ```rust
/// use safeline_core::filter::normalize_date;
///
/// assert_eq!(normalize_date("2024-03-05").as_deref(), Some("2024-03-05"));
/// assert_eq!(normalize_date("2024.3.5").as_deref(), Some("2024-03-05"));
/// assert_eq!(normalize_date("2024/12/1").as_deref(), Some("2024-12-01"));
/// assert_eq!(normalize_date("2024-3/5"), None);
/// assert_eq!(normalize_date("미정"), None);
/// ```
pub fn normalize_date(raw: &str) -> Option<String> {
    let mut cursor = Cursor::new(raw.trim());

    let year = cursor.digits(4, 4)?;
    let separator = cursor.separator()?;
    cursor.skip_space();
    let month = cursor.digits(1, 2)?;
    cursor.expect(separator)?;
    cursor.skip_space();
    let day = cursor.digits(1, 2)?;

    if cursor.at_digit() {
        return None;
    }

    Some(format!("{year}-{month:0>2}-{day:0>2}"))
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn at_digit(&self) -> bool {
        self.peek().is_some_and(|b| b.is_ascii_digit())
    }

    fn digits(&mut self, min: usize, max: usize) -> Option<&'a str> {
        let start = self.pos;
        while self.pos - start < max && self.at_digit() {
            self.pos += 1;
        }
        if self.pos - start < min {
            return None;
        }
        Some(&self.text[start..self.pos])
    }

    fn separator(&mut self) -> Option<u8> {
        let b = self.peek().filter(|b| matches!(b, b'-' | b'.' | b'/'))?;
        self.pos += 1;
        Some(b)
    }

    fn expect(&mut self, expected: u8) -> Option<()> {
        (self.peek()? == expected).then(|| self.pos += 1)
    }

    fn skip_space(&mut self) {
        if self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }
}
