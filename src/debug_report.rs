use akarkata::{Branch, Stages, StemResultVerbose, StepSummary};

mod ansi {
    const RESET: &str = "\x1b[0m";
    const DIM: &str = "\x1b[2m";
    const BOLD_CYAN: &str = "\x1b[1;36m";
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const BLUE: &str = "\x1b[34m";
    const GRAY: &str = "\x1b[90m";

    /// Report roles, each mapped to one SGR code.
    #[derive(Clone, Copy)]
    pub enum Role {
        Title,
        Separator,
        Stage,
        Candidate,
        Hit,
        Miss,
        Note,
    }

    impl Role {
        fn code(self) -> &'static str {
            match self {
                Role::Title => BOLD_CYAN,
                Role::Separator => GRAY,
                Role::Stage => BLUE,
                Role::Candidate | Role::Miss => YELLOW,
                Role::Hit => GREEN,
                Role::Note => DIM,
            }
        }
    }

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, role: Role) -> String {
            if self.enabled { format!("{}{}{}", role.code(), s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

use ansi::Role;

pub fn print_run(res: &StemResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.paint(format!("⚙  Stemming: \"{}\"", res.word), Role::Title));

    println!("\n{}", palette.paint("━━━ Probes ━━━", Role::Separator));
    if res.details.steps.is_empty() {
        println!("{}", palette.paint("  No dictionary probes (word shorter than 3 characters)", Role::Note));
    } else {
        print_steps(&res.details.steps, &palette);
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", Role::Separator));
    let root = if res.found {
        palette.paint(format!("✓ {}", res.root), Role::Hit)
    } else {
        palette.paint(format!("✗ {} (no root found)", res.root), Role::Miss)
    };
    println!("  {}", root);
    println!(
        "  {} {}  {} {}",
        palette.paint("branch:", Role::Note),
        palette.paint(branch_name(res.details.branch), Role::Stage),
        palette.paint("│ stages:", Role::Note),
        palette.paint(stage_names(res.details.stages), Role::Stage),
    );

    println!("\n{}", palette.paint("━━━ Timing ━━━", Role::Separator));
    println!("  Total: {}", palette.paint(format!("{:?}", res.details.total), Role::Hit));
    println!();
}

fn print_steps(steps: &[StepSummary], palette: &ansi::Palette) {
    for (idx, step) in steps.iter().enumerate() {
        let mark = if step.hit { palette.paint("✓", Role::Hit) } else { palette.paint("✗", Role::Note) };
        println!(
            "  {} {} {} {} {}",
            palette.paint(format!("[{}]", idx), Role::Separator),
            mark,
            palette.paint(format!("{:<13}", step.stage.name()), Role::Stage),
            palette.paint(&step.word, Role::Candidate),
            palette.paint(step.rule.map(|rule| format!("│ {rule}")).unwrap_or_default(), Role::Note),
        );
    }
}

fn branch_name(branch: Option<Branch>) -> &'static str {
    match branch {
        Some(Branch::PrefixFirst) => "prefix-first",
        Some(Branch::SuffixFirst) => "suffix-first",
        None => "-",
    }
}

fn stage_names(stages: Stages) -> String {
    if stages.is_empty() {
        return "-".to_string();
    }
    stages.iter_names().map(|(name, _)| name.to_lowercase()).collect::<Vec<_>>().join(", ")
}
