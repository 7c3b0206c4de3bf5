mod common;

use std::process::Command;

fn deckwright() -> Command {
    Command::new(env!("CARGO_BIN_EXE_deckwright"))
}

#[test]
fn renders_demo_deck_to_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.pptx");

    let output = deckwright().arg("-o").arg(&path).output().unwrap();
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), format!("Saved → {}", path.display()));

    let bytes = std::fs::read(&path).unwrap();
    let presentation = common::read_part(&bytes, "ppt/presentation.xml");
    assert_eq!(presentation.matches("<p:sldId ").count(), 9);
}

#[test]
fn renders_deck_file() {
    let dir = tempfile::tempdir().unwrap();
    let deck = dir.path().join("deck.yaml");
    let path = dir.path().join("deck.pptx");
    std::fs::write(
        &deck,
        concat!(
            "slides:\n",
            "  - kind: title\n    title: Demo\n    subtitle: Sub\n    byline: By\n",
            "  - kind: bullets\n    label: L\n    heading: H\n    items: [a, '  b']\n",
        ),
    )
    .unwrap();

    let status = deckwright()
        .arg("--deck")
        .arg(&deck)
        .arg("--output")
        .arg(&path)
        .status()
        .unwrap();
    assert!(status.success());

    let bytes = std::fs::read(&path).unwrap();
    let texts = common::texts(&common::read_part(&bytes, "ppt/slides/slide2.xml"));
    assert_eq!(texts.last().unwrap(), "2 / 2");
}

#[test]
fn malformed_deck_file_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let deck = dir.path().join("deck.yaml");
    let path = dir.path().join("deck.pptx");
    std::fs::write(&deck, "slides:\n  - kind: chart\n    label: L\n").unwrap();

    let output = deckwright()
        .arg("--deck")
        .arg(&deck)
        .arg("-o")
        .arg(&path)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!path.exists());
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
}
