//! Line-prompt tutorial session
//!
//! Drives a `Tutorial` with numbered menus and yes/no questions over any
//! reader/writer pair. End of input cancels the session.

use chrono::NaiveDate;
use std::io::{BufRead, Write};

use super::steps::TokenMode;
use super::tutorial::{Tutorial, TutorialStep};
use crate::error::DaystepResult;
use crate::models::{BuildTool, OsFamily, TokenExpiry};
use crate::picker::LabelFormatter;
use crate::tokens::TokenApi;

/// What the session ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialOutcome {
    /// Whether every step was finished
    pub completed: bool,
    pub token_value: Option<String>,
    pub build_tool: Option<BuildTool>,
    pub os: Option<OsFamily>,
}

/// Interactive tutorial over a line-based reader and a writer
pub struct TutorialSession<R, W> {
    input: R,
    output: W,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> TutorialSession<R, W> {
    pub fn new(input: R, output: W, today: NaiveDate) -> Self {
        Self {
            input,
            output,
            today,
        }
    }

    /// Consume the session, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the tutorial completes or input ends
    pub fn run(
        &mut self,
        tutorial: &mut Tutorial,
        api: &mut dyn TokenApi,
        formatter: &dyn LabelFormatter,
    ) -> DaystepResult<TutorialOutcome> {
        writeln!(self.output)?;
        writeln!(self.output, "===========================================")?;
        writeln!(self.output, "  Analyze \"{}\"", tutorial.token_step().project_key())?;
        writeln!(self.output, "===========================================")?;

        while !tutorial.is_completed() {
            let answered = match tutorial.current_step() {
                Some(TutorialStep::ProvideToken) => self.token_step(tutorial, api, formatter)?,
                Some(TutorialStep::RunAnalysis) => self.analysis_step(tutorial, formatter)?,
                None => break,
            };
            if !answered {
                writeln!(self.output)?;
                writeln!(self.output, "Tutorial cancelled.")?;
                break;
            }
        }

        let outcome = TutorialOutcome {
            completed: tutorial.is_completed(),
            token_value: tutorial.token_step().token_value().map(str::to_string),
            build_tool: tutorial.build_step().tool(),
            os: tutorial.build_step().os(),
        };

        if outcome.completed {
            self.print_summary(&outcome)?;
        }

        Ok(outcome)
    }

    /// Returns false when input ended
    fn token_step(
        &mut self,
        tutorial: &mut Tutorial,
        api: &mut dyn TokenApi,
        formatter: &dyn LabelFormatter,
    ) -> DaystepResult<bool> {
        self.print_header(1, &tutorial.step_title(TutorialStep::ProvideToken, formatter))?;

        if let Some(value) = tutorial.token_step().token_value().map(str::to_string) {
            writeln!(self.output, "Current token: {}", value)?;
            let Some(keep) = self.confirm("Keep this token? (yes/no) [yes]: ", true)? else {
                return Ok(false);
            };
            if keep {
                tutorial.continue_step()?;
                return Ok(true);
            }
            self.discard_token(tutorial, api)?;
        }

        writeln!(self.output)?;
        writeln!(
            self.output,
            "  1. {} (default)",
            formatter.format_label("onboarding.token.generate.PROJECT_ANALYSIS_TOKEN", &[])
        )?;
        writeln!(
            self.output,
            "  2. {}",
            formatter.format_label("onboarding.token.use_existing_token", &[])
        )?;
        let Some(choice) = self.choose("Select an option [1]: ", 2, 0)? else {
            return Ok(false);
        };

        if choice == 0 {
            tutorial.token_step_mut().set_mode(TokenMode::Generate);
            if !self.generate_token(tutorial, api, formatter)? {
                return Ok(false);
            }
        } else {
            tutorial.token_step_mut().set_mode(TokenMode::UseExisting);
            let label = formatter.format_label("onboarding.token.use_existing_token.label", &[]);
            let Some(value) = self.prompt(&format!("{}: ", label))? else {
                return Ok(false);
            };
            tutorial.token_step_mut().set_existing_value(value);
            if let Some(key) = tutorial.token_step().validation_message() {
                writeln!(self.output, "{}", formatter.format_label(key, &[]))?;
            }
        }

        if tutorial.continue_enabled() {
            tutorial.continue_step()?;
        }
        Ok(true)
    }

    fn generate_token(
        &mut self,
        tutorial: &mut Tutorial,
        api: &mut dyn TokenApi,
        formatter: &dyn LabelFormatter,
    ) -> DaystepResult<bool> {
        let name_label = formatter.format_label("onboarding.token.name.label", &[]);
        let default_name = tutorial.token_step().name().to_string();
        let Some(name) = self.prompt(&format!("{} [{}]: ", name_label, default_name))? else {
            return Ok(false);
        };
        if !name.is_empty() {
            tutorial.token_step_mut().set_name(name);
        }

        writeln!(self.output)?;
        let current = tutorial.token_step().expiry();
        let mut default_choice = 0;
        for (index, expiry) in TokenExpiry::ALL.into_iter().enumerate() {
            if expiry == current {
                default_choice = index;
            }
            writeln!(
                self.output,
                "  {}. {}",
                index + 1,
                formatter.format_label(&expiry.label_key(), &[])
            )?;
        }
        let prompt = format!("Expires in [{}]: ", default_choice + 1);
        let Some(choice) = self.choose(&prompt, TokenExpiry::ALL.len(), default_choice)? else {
            return Ok(false);
        };
        tutorial.token_step_mut().set_expiry(TokenExpiry::ALL[choice]);

        match tutorial.token_step_mut().generate(api, self.today) {
            Ok(generated) => {
                let value = generated.value.clone();
                writeln!(self.output)?;
                writeln!(self.output, "Token value: {}", value)?;
                writeln!(self.output, "It will not be shown again; copy it now.")?;
            }
            Err(e) => {
                writeln!(self.output, "Error: {}", e)?;
                return Ok(true);
            }
        }

        let Some(delete) = self.confirm("Delete this token and start over? (yes/no) [no]: ", false)?
        else {
            return Ok(false);
        };
        if delete {
            self.discard_token(tutorial, api)?;
        }
        Ok(true)
    }

    fn discard_token(&mut self, tutorial: &mut Tutorial, api: &mut dyn TokenApi) -> DaystepResult<()> {
        match tutorial.token_step().mode() {
            TokenMode::Generate => {
                tutorial.token_step_mut().delete(api)?;
                writeln!(self.output, "Token deleted.")?;
            }
            TokenMode::UseExisting => tutorial.token_step_mut().set_existing_value(""),
        }
        Ok(())
    }

    fn analysis_step(
        &mut self,
        tutorial: &mut Tutorial,
        formatter: &dyn LabelFormatter,
    ) -> DaystepResult<bool> {
        self.print_header(2, &tutorial.step_title(TutorialStep::RunAnalysis, formatter))?;

        writeln!(self.output, "What is your build technology?")?;
        for (index, tool) in BuildTool::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {}", index + 1, tool)?;
        }
        let Some(answer) = self.prompt("Select build tool, or 'b' to go back [1]: ")? else {
            return Ok(false);
        };
        if answer.eq_ignore_ascii_case("b") {
            tutorial.click_heading(TutorialStep::ProvideToken)?;
            return Ok(true);
        }
        let tool = BuildTool::ALL[parse_choice(&answer, BuildTool::ALL.len(), 0)];
        tutorial.build_step_mut().select_tool(tool);

        if tutorial.build_step().needs_os() {
            writeln!(self.output)?;
            writeln!(self.output, "What is your OS?")?;
            for (index, os) in OsFamily::ALL.iter().enumerate() {
                writeln!(self.output, "  {}. {}", index + 1, os)?;
            }
            let Some(choice) = self.choose("Select OS [1]: ", OsFamily::ALL.len(), 0)? else {
                return Ok(false);
            };
            tutorial.build_step_mut().select_os(OsFamily::ALL[choice]);
        }

        if tutorial.continue_enabled() {
            tutorial.continue_step()?;
        }
        Ok(true)
    }

    fn print_header(&mut self, number: usize, title: &str) -> DaystepResult<()> {
        let heading = format!("Step {}: {}", number, title);
        writeln!(self.output)?;
        writeln!(self.output, "{}", heading)?;
        writeln!(self.output, "{}", "=".repeat(heading.len()))?;
        Ok(())
    }

    fn print_summary(&mut self, outcome: &TutorialOutcome) -> DaystepResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Tutorial complete!")?;
        if let Some(tool) = outcome.build_tool {
            match outcome.os {
                Some(os) => writeln!(self.output, "Build: {} on {}", tool, os)?,
                None => writeln!(self.output, "Build: {}", tool)?,
            }
        }
        if let Some(value) = &outcome.token_value {
            writeln!(self.output, "Token: {}", value)?;
        }
        Ok(())
    }

    /// Read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> DaystepResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn choose(&mut self, message: &str, count: usize, default: usize) -> DaystepResult<Option<usize>> {
        Ok(self
            .prompt(message)?
            .map(|answer| parse_choice(&answer, count, default)))
    }

    fn confirm(&mut self, message: &str, default: bool) -> DaystepResult<Option<bool>> {
        Ok(self.prompt(message)?.map(|answer| {
            match answer.to_lowercase().as_str() {
                "" => default,
                "y" | "yes" => true,
                _ => false,
            }
        }))
    }
}

/// 1-based menu answer to a 0-based index; anything else picks `default`
fn parse_choice(answer: &str, count: usize, default: usize) -> usize {
    match answer.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => n - 1,
        _ => default,
    }
}
