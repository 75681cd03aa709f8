use std::io::Write;

use cyoa::{error::StoryError, story::load_story};

#[test]
fn loads_story_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{"intro": {"title": "Start", "story": ["You wake up."], "options": [{"text": "Open door", "arc": "door"}]},
            "door": {"title": "Door", "story": ["It's locked."]}}"#,
    )
    .unwrap();
    let story = load_story(file.path()).unwrap();
    assert_eq!(story.len(), 2);
    assert_eq!(story.arc("intro").options[0].arc, "door");
    assert!(story.dangling_arcs().is_empty());
}

#[test]
fn garbage_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"title: Start").unwrap();
    assert!(matches!(load_story(file.path()), Err(StoryError::Parse(_))));
}

#[test]
fn directory_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_story(dir.path()),
        Err(StoryError::FileRead { .. })
    ));
}

#[test]
fn bundled_story_is_closed() {
    let story = load_story(concat!(env!("CARGO_MANIFEST_DIR"), "/gopher.json")).unwrap();
    assert!(story.contains("intro"));
    assert!(story.dangling_arcs().is_empty());
}
