//! Flat-text join/split for already-decoded line groups.
//!
//! A group is one container's worth of decoded lines. `join` concatenates
//! groups into a single flat text file, separating them with a banner line
//! so the boundary survives a later `split`; `split` is its exact inverse.
//! Neither function touches ciphertext, code units, or any container
//! layout - they operate purely on `Vec<String>`.

const BANNER: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

/// Join line groups into one flat text, with a banner line between (not
/// before or after) successive groups.
#[must_use]
pub fn join(groups: &[Vec<String>]) -> String {
    groups
        .iter()
        .map(|group| group.join("\n"))
        .collect::<Vec<_>>()
        .join(&format!("\n{BANNER}\n"))
}

/// Split flat text back into line groups at banner lines.
///
/// A line is recognized as a banner only if it consists of exactly the
/// banner string on its own line; ordinary text is never mistaken for one
/// unless it happens to reproduce that exact sequence.
#[must_use]
pub fn split(text: &str) -> Vec<Vec<String>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();
    for line in text.split('\n') {
        if line == BANNER {
            groups.push(std::mem::take(&mut current));
        } else {
            current.push(line.to_owned());
        }
    }
    groups.push(current);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_group_has_no_banner() {
        let groups = vec![vec!["one".to_owned(), "two".to_owned()]];
        assert_eq!(join(&groups), "one\ntwo");
    }

    #[test]
    fn two_groups_are_separated_by_one_banner() {
        let groups = vec![
            vec!["a".to_owned()],
            vec!["b".to_owned(), "c".to_owned()],
        ];
        let text = join(&groups);
        assert_eq!(text, format!("a\n{BANNER}\nb\nc"));
    }

    #[test]
    fn split_is_the_inverse_of_join() {
        let groups = vec![
            vec!["line one".to_owned(), "line two".to_owned()],
            vec!["another group".to_owned()],
            vec![String::new(), "trailing blank above".to_owned()],
        ];
        let text = join(&groups);
        assert_eq!(split(&text), groups);
    }

    #[test]
    fn empty_input_splits_to_one_group_with_a_single_blank_line() {
        assert_eq!(split(""), vec![vec![String::new()]]);
    }
}
