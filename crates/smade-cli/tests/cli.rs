//! End-to-end runs of the `blueprint-info` binary.

use std::fs;
use std::process::{Command, Output};

use smade_blueprint::{EntityType, Header, Meta, MetaDockedEntry, HEADER_FILE_NAME, META_FILE_NAME};
use smade_test_utils::{every_kind_tree, sample_elements, ScratchDir};

fn blueprint(dir: &ScratchDir) {
    let header = Header {
        version: 2,
        entity_type: EntityType::Ship,
        bbox_min: [-2.0, 0.0, -2.0],
        bbox_max: [2.0, 1.5, 2.0],
        elements: sample_elements(),
    };
    header.save(dir.join(HEADER_FILE_NAME)).unwrap();
}

fn run(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_blueprint-info"))
        .env_remove("STARMADE_HOME")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn raw_ids_without_game_data() {
    let dir = ScratchDir::new("cli-raw");
    blueprint(&dir);
    let text = stdout(&run(&[dir.path().as_os_str()]));

    assert!(text.contains("    Version : 2\n"));
    assert!(text.contains("Entity type : ship\n"));
    assert!(text.contains("Bounding box: (-2.0, 0.0, -2.0) - (2.0, 1.5, 2.0)\n"));
    assert!(text.contains("Block ID   count\n       3 : 42\n       7 : 800\n      13 : 900\n"));
    assert!(text.ends_with("   Total : 1742\n"));
}

#[test]
fn header_file_path_is_accepted() {
    let dir = ScratchDir::new("cli-file");
    blueprint(&dir);
    let path = dir.join(HEADER_FILE_NAME);
    let text = stdout(&run(&[path.as_os_str()]));
    assert!(text.contains("Entity type : ship\n"));
}

#[test]
fn bare_header_file_name_reports_current_dir() {
    let dir = ScratchDir::new("cli-bare");
    blueprint(&dir);
    let output = Command::new(env!("CARGO_BIN_EXE_blueprint-info"))
        .env_remove("STARMADE_HOME")
        .current_dir(dir.path())
        .arg(HEADER_FILE_NAME)
        .output()
        .unwrap();
    let text = stdout(&output);
    assert_eq!(text.lines().next(), Some("."));
    assert!(text.contains("Entity type : ship\n"));
}

#[test]
fn names_resolved_from_game_data() {
    let dir = ScratchDir::new("cli-blocks");
    blueprint(&dir);
    let game = ScratchDir::new("cli-game");
    let config = game.join("data").join("config");
    fs::create_dir_all(&config).unwrap();
    fs::write(config.join("BlockTypes.properties"), "ROCK = 3\nHULL = 7\n").unwrap();
    fs::write(
        config.join("BlockConfig.xml"),
        r#"<Config><Element><Hull><Block type="HULL" name="Grey Hull"/></Hull>
           <Block type="ROCK" name="Rock"/></Element></Config>"#,
    )
    .unwrap();

    let output = run(&[
        dir.path().as_os_str(),
        "--starmade".as_ref(),
        game.path().as_os_str(),
    ]);
    let text = stdout(&output);
    assert!(text.contains("     count Block ID\n        42 Rock\n       800 Grey Hull\n"));
    assert!(text.contains("       900 unknown (13)\n"));
    assert!(text.ends_with("(     1742 Total)\n"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[blocks] loaded 2 block types"));
}

#[test]
fn meta_summary_on_request() {
    let dir = ScratchDir::new("cli-meta");
    blueprint(&dir);
    Meta {
        version: 0,
        docked: Some(vec![MetaDockedEntry {
            name: "turret".into(),
            position: [0, 2, 0],
            size: [1.0, 1.0, 1.0],
            style: 0,
            orientation: 0,
        }]),
        tags: Some(every_kind_tree()),
    }
    .save(dir.join(META_FILE_NAME))
    .unwrap();

    let plain = stdout(&run(&[dir.path().as_os_str()]));
    assert!(!plain.contains("Meta\n----"));

    let text = stdout(&run(&[dir.path().as_os_str(), "--meta".as_ref()]));
    assert!(text.contains("Meta\n----\n"));
    assert!(text.contains("     Docked : 1\n"));
    assert!(text.contains("       Tags : root (struct, 12 tags)\n"));
}

#[test]
fn missing_blueprint_fails() {
    let dir = ScratchDir::new("cli-missing");
    let output = run(&[dir.join("nope").as_os_str()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("blueprint not found"));
}

#[test]
fn corrupt_header_fails_with_context() {
    let dir = ScratchDir::new("cli-corrupt");
    fs::write(dir.join(HEADER_FILE_NAME), [0u8, 0, 0, 1, 0, 0]).unwrap();
    let output = run(&[dir.path().as_os_str()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read header"));
}
