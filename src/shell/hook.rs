//! Shell integration printed by `venvy init <shell>`.
//!
//! The hook defines a `venvy` shell function. `venvy activate …` runs the
//! binary and evaluates what it prints in the current shell; every other
//! subcommand is passed straight through. So is `activate` with an
//! informational flag (`--help`, `--version`, `--path`), whose output is not
//! shell code.

use super::platform::ShellKind;

const POSIX_HOOK: &str = r#"venvy() {
    if [ "$1" = "activate" ]; then
        shift
        for __venvy_arg in "$@"; do
            case "$__venvy_arg" in
                -h|--help|-V|--version|--path)
                    unset __venvy_arg
                    command venvy activate "$@"
                    return $?
                    ;;
            esac
        done
        unset __venvy_arg
        __venvy_cmd="$(command venvy activate --shell __SHELL__ "$@")" || return $?
        eval "$__venvy_cmd"
        unset __venvy_cmd
    else
        command venvy "$@"
    fi
}
"#;

const FISH_HOOK: &str = r#"function venvy
    if test (count $argv) -gt 0; and test "$argv[1]" = activate
        set -e argv[1]
        for __venvy_arg in -h --help -V --version --path
            if contains -- $__venvy_arg $argv
                command venvy activate $argv
                return $status
            end
        end
        set -l __venvy_cmd (command venvy activate --shell fish $argv); or return $status
        eval $__venvy_cmd
    else
        command venvy $argv
    end
end
"#;

/// Shell code that installs the `venvy` wrapper function.
pub fn hook_script(shell: ShellKind) -> String {
    match shell {
        ShellKind::Fish => FISH_HOOK.to_string(),
        ShellKind::Bash | ShellKind::Zsh | ShellKind::Posix => {
            POSIX_HOOK.replace("__SHELL__", shell.name())
        }
    }
}

/// The line users add to their shell startup file.
pub fn install_line(shell: ShellKind) -> String {
    match shell {
        ShellKind::Fish => "venvy init fish | source".to_string(),
        _ => format!("eval \"$(venvy init {})\"", shell.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_hook_passes_shell_through() {
        let script = hook_script(ShellKind::Zsh);
        assert!(script.contains("venvy()"));
        assert!(script.contains("command venvy activate --shell zsh"));
        assert!(script.contains("eval \"$__venvy_cmd\""));
        assert!(!script.contains("__SHELL__"));
    }

    #[test]
    fn posix_hook_does_not_eval_informational_output() {
        let script = hook_script(ShellKind::Bash);
        assert!(script.contains("-h|--help|-V|--version|--path)"));
        let pass_through = script.find("command venvy activate \"$@\"").unwrap();
        let eval = script.find("eval ").unwrap();
        assert!(pass_through < eval);
    }

    #[test]
    fn fish_hook_does_not_eval_informational_output() {
        let script = hook_script(ShellKind::Fish);
        assert!(script.contains("for __venvy_arg in -h --help -V --version --path"));
        assert!(script.contains("contains -- $__venvy_arg $argv"));
    }

    #[test]
    fn fish_hook_is_a_fish_function() {
        let script = hook_script(ShellKind::Fish);
        assert!(script.starts_with("function venvy"));
        assert!(script.contains("--shell fish"));
        assert!(script.trim_end().ends_with("end"));
    }

    #[test]
    fn install_lines() {
        assert_eq!(
            install_line(ShellKind::Bash),
            "eval \"$(venvy init bash)\""
        );
        assert_eq!(install_line(ShellKind::Fish), "venvy init fish | source");
    }
}
