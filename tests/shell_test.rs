//! Tests for the interactive menu shell

use std::path::PathBuf;

use tempfile::TempDir;

use coursecat::shell::Shell;
use coursecat::util::testing;

fn create_course_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("courses.csv");
    std::fs::write(&path, content).expect("write course file");
    path
}

fn run_session(input: &str, preset_file: Option<PathBuf>) -> String {
    testing::init_test_setup();
    let mut output = Vec::new();
    let mut shell = Shell::new(input.as_bytes(), &mut output, ',', preset_file);
    shell.run().unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn given_preset_file_when_loading_and_listing_then_courses_print_in_order() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_course_file(
        &temp,
        "CSCI200,Data Structures,CSCI100\nCSCI100,Introduction to Computer Science\n",
    );

    // Act: load, list, quit
    let output = run_session("1\n2\n9\n", Some(path));

    // Assert
    assert!(output.contains("Welcome to the course planner."));
    assert!(output.contains("Courses loaded successfully!"));
    let intro = output
        .find("CSCI100, Introduction to Computer Science")
        .expect("intro course printed");
    let ds = output
        .find("CSCI200, Data Structures")
        .expect("data structures printed");
    assert!(intro < ds, "courses must print in ascending number order");
    assert!(output.contains("Prerequisites: CSCI100"));
}

#[test]
fn given_no_preset_file_when_loading_then_shell_prompts_for_path() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_course_file(&temp, "CS101,Intro\n");

    // Act: selection 1, then the path at the prompt, then quit
    let input = format!("1\n{}\n9\n", path.display());
    let output = run_session(&input, None);

    // Assert
    assert!(output.contains("Please enter the file name to load:"));
    assert!(output.contains("Courses loaded successfully!"));
}

#[test]
fn given_loaded_catalog_when_showing_a_course_then_record_prints() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_course_file(&temp, "CSCI300,Introduction to Algorithms,CSCI200\nCSCI200,Data Structures\n");

    // Act: load, show (lower-case query), quit
    let output = run_session("1\n3\ncsci300\n9\n", Some(path));

    // Assert
    assert!(output.contains("What course do you want to know about?"));
    assert!(output.contains("CSCI300, Introduction to Algorithms"));
    assert!(output.contains("Prerequisites: CSCI200"));
}

#[test]
fn given_unknown_course_number_when_showing_then_not_found_message() {
    let temp = TempDir::new().unwrap();
    let path = create_course_file(&temp, "CS101,Intro\n");

    let output = run_session("1\n3\nCS999\n9\n", Some(path));

    assert!(output.contains("Course Number not found!"));
}

#[test]
fn given_invalid_selection_when_dispatching_then_loop_continues() {
    // Act: invalid selection, then quit
    let output = run_session("42\n9\n", None);

    // Assert: reported, and the menu came back
    assert!(output.contains("42 is not a valid option."));
    assert_eq!(output.matches("What would you like to do?").count(), 2);
}

#[test]
fn given_invalid_course_file_when_loading_then_error_reported_and_catalog_empty() {
    // Arrange: undefined prerequisite fails the gate
    let temp = TempDir::new().unwrap();
    let path = create_course_file(&temp, "CS101,Intro,CS999\n");

    // Act: load (fails), list (prints nothing), quit
    let output = run_session("1\n2\n9\n", Some(path));

    // Assert: all-or-nothing load
    assert!(output.contains("*** ERROR ***"));
    assert!(output.contains("Invalid prerequisite: CS999"));
    assert!(!output.contains("CS101, Intro"));
}

#[test]
fn given_end_of_input_when_running_then_shell_exits_cleanly() {
    let output = run_session("", None);
    assert!(output.contains("Welcome to the course planner."));
}
