use super::*;

#[test]
fn staged_label_shows_name_and_formatted_size() {
    assert_eq!(staged_label("notes.pdf", 2048), "notes.pdf (2 KB)");
    assert_eq!(staged_label("clip.mp4", 1_572_864), "clip.mp4 (1.5 MB)");
}

#[test]
fn staged_label_keeps_odd_file_names_verbatim() {
    assert_eq!(staged_label("a (1).txt", 10), "a (1).txt (10 Bytes)");
}
