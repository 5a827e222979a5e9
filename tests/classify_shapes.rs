use copy_syntax::syntax::{classify, Kind, Location, Shape};

fn loc(path: &str, kind: Kind) -> Location {
    Location::with_separator(path, kind, '/')
}

#[test]
fn single_file_onto_missing_target_is_file_to_file() {
    let sources = [loc("/a.txt", Kind::File)];
    assert_eq!(classify(&sources, &loc("/b.txt", Kind::Missing)), Shape::FileToFile);
}

#[test]
fn single_file_onto_existing_file_is_file_to_file() {
    let sources = [loc("/a.txt", Kind::File)];
    assert_eq!(classify(&sources, &loc("/b.txt", Kind::File)), Shape::FileToFile);
}

#[test]
fn single_file_into_existing_folder_is_file_to_folder() {
    let sources = [loc("/a.txt", Kind::File)];
    assert_eq!(classify(&sources, &loc("/out", Kind::Directory)), Shape::FileToFolder);
}

#[test]
fn single_folder_is_tree_to_folder_whatever_the_target() {
    let sources = [loc("/data", Kind::Directory)];
    for target_kind in [Kind::Missing, Kind::File, Kind::Directory] {
        assert_eq!(
            classify(&sources, &loc("/backup", target_kind)),
            Shape::TreeToFolder,
            "target kind {target_kind:?}"
        );
    }
}

#[test]
fn single_missing_source_is_tree_to_folder() {
    let sources = [loc("/not/yet", Kind::Missing)];
    assert_eq!(classify(&sources, &loc("/out", Kind::Directory)), Shape::TreeToFolder);
}

#[test]
fn single_file_source_never_yields_folder_shapes() {
    for target_kind in [Kind::Missing, Kind::File, Kind::Directory] {
        let shape = classify(&[loc("/a.txt", Kind::File)], &loc("/t", target_kind));
        assert!(
            matches!(shape, Shape::FileToFile | Shape::FileToFolder),
            "got {shape:?} for target {target_kind:?}"
        );
    }
}

#[test]
fn two_or_more_sources_are_many_to_folder() {
    let kinds = [Kind::File, Kind::Directory, Kind::Missing];
    for n in 2..=4 {
        let sources: Vec<Location> = (0..n)
            .map(|i| loc(&format!("/src{i}"), kinds[i % kinds.len()]))
            .collect();
        for target_kind in kinds {
            assert_eq!(
                classify(&sources, &loc("/t", target_kind)),
                Shape::ManyToFolder,
                "n={n} target={target_kind:?}"
            );
        }
    }
}

#[test]
fn shapes_display_readably() {
    assert_eq!(Shape::FileToFile.to_string(), "file -> file");
    assert_eq!(Shape::ManyToFolder.to_string(), "many -> folder");
}
