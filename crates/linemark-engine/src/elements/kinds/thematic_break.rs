/// Horizontal rules: `---`, `***`, `___`, optionally spaced (`- - -`).
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MIN_MARKERS: usize = 3;

    pub fn matches(line: &str) -> bool {
        let mut marker = None;
        let mut count = 0usize;

        for c in line.chars() {
            match c {
                ' ' | '\t' => continue,
                '-' | '*' | '_' => {
                    if *marker.get_or_insert(c) != c {
                        return false;
                    }
                    count += 1;
                }
                _ => return false,
            }
        }
        count >= Self::MIN_MARKERS
    }
}
