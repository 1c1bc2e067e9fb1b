//! Tests for hook binding file loading.

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_parse_content_one_line_per_state() {
    let content = TaskState::ALL
        .iter()
        .map(|state| format!("{state} /bin/on-{} \\T", state.as_keyword().to_lowercase()))
        .collect::<Vec<_>>()
        .join("\n");

    let parsed = parse_content(&content);
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.commands.len(), TaskState::ALL.len());
    assert_eq!(
        parsed.commands.get(TaskState::Running),
        Some("/bin/on-running \\T")
    );
    assert_eq!(parsed.commands.get(TaskState::Lost), Some("/bin/on-lost \\T"));
}

#[test]
fn test_parse_content_keeps_template_verbatim() {
    let parsed = parse_content("FAILED \t /bin/alert.sh {service}  {service.owner}  \n");
    assert_eq!(
        parsed.commands.get(TaskState::Failed),
        Some("/bin/alert.sh {service}  {service.owner}  ")
    );
}

#[test]
fn test_parse_content_duplicate_first_wins() {
    let parsed = parse_content("RUNNING first\nRUNNING second\n");
    assert_eq!(parsed.commands.get(TaskState::Running), Some("first"));
    assert_eq!(
        parsed.diagnostics,
        vec![ConfigDiagnostic::DuplicateState {
            line: 2,
            state: TaskState::Running
        }]
    );
}

#[test]
fn test_parse_content_unknown_state_skipped() {
    let parsed = parse_content("running lower\nPAUSED /bin/x\nKILLED /bin/k\n");
    assert_eq!(parsed.commands.len(), 1);
    assert_eq!(parsed.commands.get(TaskState::Killed), Some("/bin/k"));
    assert_eq!(
        parsed.diagnostics,
        vec![
            ConfigDiagnostic::UnknownState {
                line: 1,
                keyword: "running".into()
            },
            ConfigDiagnostic::UnknownState {
                line: 2,
                keyword: "PAUSED".into()
            },
        ]
    );
}

#[test]
fn test_parse_content_empty_command_skipped() {
    let parsed = parse_content("STAGING\nSTARTING   \t\nSTAGING /bin/s\n");
    assert_eq!(parsed.commands.len(), 1);
    assert_eq!(parsed.commands.get(TaskState::Staging), Some("/bin/s"));
    assert_eq!(
        parsed.diagnostics,
        vec![
            ConfigDiagnostic::EmptyCommand {
                line: 1,
                state: TaskState::Staging
            },
            ConfigDiagnostic::EmptyCommand {
                line: 2,
                state: TaskState::Starting
            },
        ]
    );
}

#[test]
fn test_parse_content_duplicate_checked_before_empty() {
    let parsed = parse_content("ERROR /bin/e\nERROR\n");
    assert_eq!(
        parsed.diagnostics,
        vec![ConfigDiagnostic::DuplicateState {
            line: 2,
            state: TaskState::Error
        }]
    );
}

#[test]
fn test_parse_content_skips_blank_and_comment_lines() {
    let parsed = parse_content("\n   \n# RUNNING /bin/commented\n  FINISHED /bin/done\n");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.commands.len(), 1);
    assert_eq!(parsed.commands.get(TaskState::Finished), Some("/bin/done"));
}

#[test]
fn test_parse_content_hash_prefixed_token_is_comment() {
    let parsed = parse_content("#foo /bin/x\n#RUNNING /bin/off\nfoo# /bin/y\n");
    assert!(parsed.commands.is_empty());
    assert_eq!(
        parsed.diagnostics,
        vec![ConfigDiagnostic::UnknownState {
            line: 3,
            keyword: "foo#".into()
        }]
    );
}

#[test]
fn test_parse_content_crlf_line_endings() {
    let parsed = parse_content("RUNNING /bin/r\r\nFAILED /bin/f\r\n");
    assert_eq!(parsed.commands.get(TaskState::Running), Some("/bin/r"));
    assert_eq!(parsed.commands.get(TaskState::Failed), Some("/bin/f"));
}

#[test]
fn test_parse_content_last_line_without_newline() {
    let parsed = parse_content("LOST /bin/lost");
    assert_eq!(parsed.commands.get(TaskState::Lost), Some("/bin/lost"));
}

#[test]
fn test_parse_content_tab_separated_keyword() {
    let parsed = parse_content("KILLING\t/bin/k \\C");
    assert_eq!(parsed.commands.get(TaskState::Killing), Some("/bin/k \\C"));
}

#[test]
fn test_iter_in_state_order() {
    let parsed = parse_content("FAILED f\nSTAGING s\nRUNNING r\n");
    let states: Vec<TaskState> = parsed.commands.iter().map(|(s, _)| s).collect();
    assert_eq!(
        states,
        [TaskState::Staging, TaskState::Running, TaskState::Failed]
    );
}

#[test]
fn test_from_iter_keeps_first() {
    let map: StateCommandMap = [
        (TaskState::Running, "a".to_string()),
        (TaskState::Running, "b".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(TaskState::Running), Some("a"));
}

#[test]
fn test_parse_missing_file_is_empty() {
    let parsed = parse(Path::new("/nonexistent/dir/hooks.cfg"));
    assert!(parsed.commands.is_empty());
    assert!(parsed.diagnostics.is_empty());
}

#[test]
fn test_parse_directory_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let parsed = parse(dir.path());
    assert!(parsed.commands.is_empty());
    assert!(matches!(
        parsed.diagnostics.as_slice(),
        [ConfigDiagnostic::Unreadable { .. }]
    ));
}

#[test]
fn test_parse_file_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "RUNNING /bin/notify.sh \\T \\D").unwrap();
    writeln!(file, "FAILED  /bin/alert.sh {{service}} {{service.owner}}").unwrap();
    writeln!(file, "BOGUS nothing").unwrap();
    file.flush().unwrap();

    let parsed = parse(file.path());
    assert_eq!(
        parsed.commands.get(TaskState::Running),
        Some("/bin/notify.sh \\T \\D")
    );
    assert_eq!(
        parsed.commands.get(TaskState::Failed),
        Some("/bin/alert.sh {service} {service.owner}")
    );
    assert_eq!(parsed.diagnostics.len(), 1);
}

#[test]
fn test_parse_bytes_skips_only_the_invalid_utf8_line() {
    let content = b"RUNNING /bin/notify.sh \\T\nFAILED /bin/caf\xe9.sh\nLOST /bin/lost\n";
    let parsed = parse_bytes(content);
    assert_eq!(
        parsed.commands.get(TaskState::Running),
        Some("/bin/notify.sh \\T")
    );
    assert_eq!(parsed.commands.get(TaskState::Lost), Some("/bin/lost"));
    assert_eq!(parsed.commands.get(TaskState::Failed), None);
    assert_eq!(
        parsed.diagnostics,
        vec![ConfigDiagnostic::InvalidUtf8 { line: 2 }]
    );
}

#[test]
fn test_parse_file_with_invalid_utf8_line_keeps_other_bindings() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"RUNNING /bin/r\r\nFAILED /bin/\xff\xfe\r\nLOST /bin/l\r\n")
        .unwrap();
    file.flush().unwrap();

    let parsed = parse(file.path());
    assert_eq!(parsed.commands.len(), 2);
    assert_eq!(parsed.commands.get(TaskState::Running), Some("/bin/r"));
    assert_eq!(parsed.commands.get(TaskState::Lost), Some("/bin/l"));
    assert_eq!(
        parsed.diagnostics,
        vec![ConfigDiagnostic::InvalidUtf8 { line: 2 }]
    );
}

#[test]
fn test_diagnostic_display() {
    let d = ConfigDiagnostic::UnknownState {
        line: 3,
        keyword: "PAUSED".into(),
    };
    assert_eq!(d.to_string(), "line 3: unrecognized status \"PAUSED\"");

    let d = ConfigDiagnostic::DuplicateState {
        line: 4,
        state: TaskState::Running,
    };
    assert_eq!(d.to_string(), "line 4: duplicated status \"RUNNING\"");

    let d = ConfigDiagnostic::EmptyCommand {
        line: 5,
        state: TaskState::Killed,
    };
    assert_eq!(d.to_string(), "line 5: empty command for status \"KILLED\"");

    let d = ConfigDiagnostic::InvalidUtf8 { line: 6 };
    assert_eq!(d.to_string(), "line 6: not valid UTF-8");
}

#[test]
fn test_default_hooks_path_file_name() {
    if let Some(path) = default_hooks_path() {
        assert!(path.ends_with(HOOKS_FILE_NAME));
    }
}
