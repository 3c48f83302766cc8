use console::Style;
use passgen::charset::{ALL, DIGITS, LOWER, MAX_CONSECUTIVE, SPECIAL, UPPER};
use zeroize::Zeroizing;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub struct OutputConfig {
    pub password_length: usize,
    pub count: usize,
}

pub struct RuleCheck {
    pub label: &'static str,
    pub detail: String,
    pub passed: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn longest_run(s: &str) -> usize {
    s.as_bytes()
        .chunk_by(|a, b| a == b)
        .map(|run| run.len())
        .max()
        .unwrap_or(0)
}

fn all_pass(passwords: &[Zeroizing<String>], rule: impl Fn(&str) -> bool) -> bool {
    passwords.iter().all(|p| rule(p.as_str()))
}

/// Re-checks the composition rules on every generated password.
pub fn check_rules(passwords: &[Zeroizing<String>]) -> Vec<RuleCheck> {
    let at_least_one = || "at least one".to_string();

    vec![
        RuleCheck {
            label: "Digit",
            detail: at_least_one(),
            passed: all_pass(passwords, |p| p.bytes().any(|b| DIGITS.contains(&b))),
        },
        RuleCheck {
            label: "Lowercase",
            detail: at_least_one(),
            passed: all_pass(passwords, |p| p.bytes().any(|b| LOWER.contains(&b))),
        },
        RuleCheck {
            label: "Uppercase",
            detail: at_least_one(),
            passed: all_pass(passwords, |p| p.bytes().any(|b| UPPER.contains(&b))),
        },
        RuleCheck {
            label: "Max run",
            detail: format!("{} identical in a row", MAX_CONSECUTIVE),
            passed: all_pass(passwords, |p| longest_run(p) <= MAX_CONSECUTIVE),
        },
    ]
}

pub fn display_output(
    passwords: &[Zeroizing<String>],
    config: &OutputConfig,
    options: &DisplayOptions,
) {
    let rendered = render_output(passwords, config, options);
    print!("{}", rendered.as_str());
}

fn render_output(
    passwords: &[Zeroizing<String>],
    config: &OutputConfig,
    options: &DisplayOptions,
) -> Zeroizing<String> {
    let mut out = Zeroizing::new(String::new());

    if options.quiet {
        for password in passwords {
            out.push_str(password);
            out.push('\n');
        }
        return out;
    }

    for (i, password) in passwords.iter().enumerate() {
        out.push_str(&format!("Out[{}]:\n{}\n\n", i, password.as_str()));
    }

    render_settings(&mut out, config);
    render_rules(&mut out, &check_rules(passwords), options);

    out
}

fn render_settings(out: &mut String, config: &OutputConfig) {
    out.push_str("Settings:\n");
    out.push_str(&format!(
        "  ├─ Length     {} {}\n",
        config.password_length,
        if config.password_length == 1 {
            "char"
        } else {
            "chars"
        }
    ));
    out.push_str(&format!(
        "  ├─ Charset    {} chars ({} digits, {} lower, {} upper, {} special)\n",
        ALL.len(),
        DIGITS.len(),
        LOWER.len(),
        UPPER.len(),
        SPECIAL.len()
    ));
    out.push_str("  ├─ Keystream  ChaCha20 (256-bit, OS seeded)\n");
    out.push_str("  ├─ Sampling   Unbiased rejection\n");
    out.push_str(&format!(
        "  └─ Output     {} {}\n\n",
        config.count,
        if config.count == 1 {
            "password"
        } else {
            "passwords"
        }
    ));
}

fn render_rules(out: &mut String, checks: &[RuleCheck], options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    out.push_str("Rules:\n");

    for (i, check) in checks.iter().enumerate() {
        let prefix = if i == checks.len() - 1 {
            "└─"
        } else {
            "├─"
        };

        let style = if options.color_support {
            if check.passed {
                Style::new().green()
            } else {
                Style::new().yellow()
            }
        } else {
            Style::new()
        };

        let status = if check.passed { check_ok } else { check_warn };

        out.push_str(&format!(
            "  {} {:<10} {} {}\n",
            prefix,
            check.label,
            style.apply_to(format!("[{}]", status)),
            check.detail
        ));
    }
}
