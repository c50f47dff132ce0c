use msvc_testgen::{
    GenError, GeneratorSettings, LocalFileSystem, RandomIdentifiers, SequentialIdentifiers,
    SolutionGenerator,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE: &str = "name=__INSERT_NAME_HERE__ id=__INSERT_GUID_HERE__";

fn setup(sources: &[&str]) -> (TempDir, GeneratorSettings) {
    let temp_dir = TempDir::new().unwrap();
    let source_dir = temp_dir.path().join("unit_tests");
    let output_dir = temp_dir.path().join("build");
    fs::create_dir_all(&source_dir).unwrap();
    for source in sources {
        fs::write(source_dir.join(source), "int main() { return 0; }").unwrap();
    }

    let template_path = temp_dir.path().join("unittest_template.xml");
    fs::write(&template_path, TEMPLATE).unwrap();

    let settings = GeneratorSettings::new(source_dir, output_dir, template_path);
    (temp_dir, settings)
}

fn output_file_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect()
}

#[test]
fn test_end_to_end_alpha_beta_example() {
    let (_temp_dir, settings) = setup(&["alpha.cpp", "beta.cpp", "notes.txt"]);
    let output_dir = settings.output_dir.clone();

    let generator = SolutionGenerator::new(LocalFileSystem::new(), RandomIdentifiers::new(), settings);
    let summary = generator.run().unwrap();

    let expected: BTreeSet<String> = ["alpha.vcproj", "beta.vcproj", "unit_tests.sln"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(output_file_names(&output_dir), expected);

    let solution = fs::read_to_string(output_dir.join("unit_tests.sln")).unwrap();
    assert!(solution.starts_with('\u{FEFF}'));
    assert!(solution.contains("\"fife_engine\""));

    for project in &summary.projects {
        let body = fs::read_to_string(output_dir.join(format!("{}.vcproj", project.name))).unwrap();
        assert_eq!(body, format!("name={} id={}", project.name, project.identifier));
        assert!(!body.contains("__INSERT_NAME_HERE__"));
        assert!(!body.contains("__INSERT_GUID_HERE__"));

        // identifier in the solution matches the one embedded in the project file
        assert!(solution.contains(&format!(
            "\"{name}\", \"{name}.vcproj\", \"{id}\"",
            name = project.name,
            id = project.identifier
        )));

        let mapping_lines = solution
            .lines()
            .filter(|l| l.starts_with(&format!("\t\t{}.", project.identifier)))
            .count();
        assert_eq!(mapping_lines, 4);
    }
}

#[test]
fn test_solution_order_matches_enumeration() {
    let (_temp_dir, settings) = setup(&["one.cpp", "two.cpp", "three.cpp", "four.cpp"]);
    let output_dir = settings.output_dir.clone();

    let generator =
        SolutionGenerator::new(LocalFileSystem::new(), SequentialIdentifiers::new(), settings);
    let summary = generator.run().unwrap();
    let solution = fs::read_to_string(output_dir.join("unit_tests.sln")).unwrap();

    let block_names: Vec<String> = solution
        .lines()
        .filter(|l| l.starts_with("Project("))
        .skip(1)
        .map(|l| l.split('"').nth(3).unwrap().to_string())
        .collect();
    let summary_names: Vec<String> = summary.projects.iter().map(|p| p.name.clone()).collect();

    assert_eq!(block_names, summary_names);
    assert_eq!(summary.project_files.len(), 4);
}

#[test]
fn test_empty_source_directory() {
    let (_temp_dir, settings) = setup(&["README.txt"]);
    let output_dir = settings.output_dir.clone();

    let generator =
        SolutionGenerator::new(LocalFileSystem::new(), SequentialIdentifiers::new(), settings);
    let summary = generator.run().unwrap();

    assert!(summary.projects.is_empty());
    let solution = fs::read_to_string(output_dir.join("unit_tests.sln")).unwrap();
    assert_eq!(
        solution.lines().filter(|l| l.starts_with("Project(")).count(),
        1
    );
}

#[test]
fn test_rerun_differs_only_in_identifiers() {
    let (_temp_dir, settings) = setup(&["alpha.cpp", "beta.cpp"]);
    let output_dir = settings.output_dir.clone();

    let generator = SolutionGenerator::new(LocalFileSystem::new(), RandomIdentifiers::new(), settings);

    let first = generator.run().unwrap();
    let first_solution = fs::read_to_string(output_dir.join("unit_tests.sln")).unwrap();
    let second = generator.run().unwrap();
    let second_solution = fs::read_to_string(output_dir.join("unit_tests.sln")).unwrap();

    assert_ne!(first_solution, second_solution);

    let mut normalized = first_solution;
    for (a, b) in first.projects.iter().zip(second.projects.iter()) {
        assert_eq!(a.name, b.name);
        normalized = normalized.replace(a.identifier.as_str(), b.identifier.as_str());
    }
    assert_eq!(normalized, second_solution);
}

#[test]
fn test_regenerates_same_file_set_after_output_removal() {
    let (_temp_dir, settings) = setup(&["alpha.cpp", "beta.cpp"]);
    let output_dir = settings.output_dir.clone();

    let generator = SolutionGenerator::new(LocalFileSystem::new(), RandomIdentifiers::new(), settings);
    generator.run().unwrap();
    let first = output_file_names(&output_dir);

    fs::remove_dir_all(&output_dir).unwrap();
    generator.run().unwrap();
    let second = output_file_names(&output_dir);

    assert_eq!(first, second);
}

#[test]
fn test_existing_project_files_are_overwritten() {
    let (_temp_dir, settings) = setup(&["alpha.cpp"]);
    let output_dir = settings.output_dir.clone();
    fs::create_dir_all(&output_dir).unwrap();
    fs::write(output_dir.join("alpha.vcproj"), "stale").unwrap();

    let generator =
        SolutionGenerator::new(LocalFileSystem::new(), SequentialIdentifiers::new(), settings);
    generator.run().unwrap();

    assert_eq!(
        fs::read_to_string(output_dir.join("alpha.vcproj")).unwrap(),
        "name=alpha id={00000000-0000-0000-0000-000000000001}"
    );
}

#[test]
fn test_missing_source_directory() {
    let (temp_dir, mut settings) = setup(&[]);
    settings.source_dir = temp_dir.path().join("nope");

    let generator =
        SolutionGenerator::new(LocalFileSystem::new(), SequentialIdentifiers::new(), settings);
    let err = generator.run().unwrap_err();

    assert!(matches!(err, GenError::DirectoryNotFound { .. }));
}

#[test]
fn test_missing_template_leaves_no_solution() {
    let (temp_dir, mut settings) = setup(&["alpha.cpp"]);
    settings.template_path = temp_dir.path().join("missing.xml");
    let output_dir = settings.output_dir.clone();

    let generator =
        SolutionGenerator::new(LocalFileSystem::new(), SequentialIdentifiers::new(), settings);
    let err = generator.run().unwrap_err();

    assert!(matches!(err, GenError::TemplateNotFound { .. }));
    assert!(!output_dir.join("unit_tests.sln").exists());
}
