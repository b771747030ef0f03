//! Interactive course planner menu.
//!
//! The shell owns the catalog for its session and dispatches one parsed
//! selection per loop iteration. Input and output are injected so the loop
//! can be driven from tests without a terminal.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::errors::CatalogResult;
use crate::{loader, validator};

/// One parsed menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    Load,
    List,
    Show,
    Quit,
    Invalid(String),
}

impl Selection {
    fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Selection::Load,
            "2" => Selection::List,
            "3" => Selection::Show,
            "9" => Selection::Quit,
            other => Selection::Invalid(other.to_string()),
        }
    }
}

/// Menu-driven shell over a session-scoped catalog.
pub struct Shell<R, W> {
    input: R,
    output: W,
    delimiter: char,
    /// File to load on selection 1 without prompting
    preset_file: Option<PathBuf>,
    catalog: Catalog,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, delimiter: char, preset_file: Option<PathBuf>) -> Self {
        Self {
            input,
            output,
            delimiter,
            preset_file,
            catalog: Catalog::new(),
        }
    }

    /// Run the menu loop until selection 9 or end of input.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> CatalogResult<()> {
        writeln!(self.output, "Welcome to the course planner.")?;

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            let selection = Selection::parse(&line);
            debug!(?selection, "dispatching");
            match selection {
                Selection::Load => self.load()?,
                Selection::List => self.list()?,
                Selection::Show => self.show()?,
                Selection::Quit => break,
                Selection::Invalid(input) => {
                    writeln!(self.output, "{} is not a valid option.", input)?;
                }
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> CatalogResult<()> {
        writeln!(self.output, "  1. Load Courses")?;
        writeln!(self.output, "  2. Print Course List")?;
        writeln!(self.output, "  3. Print Course")?;
        writeln!(self.output, "  9. Exit")?;
        write!(self.output, "\nWhat would you like to do? ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one input line; `None` means end of input.
    fn read_line(&mut self) -> CatalogResult<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Selection 1: validate, then load the whole file or nothing.
    fn load(&mut self) -> CatalogResult<()> {
        let path = match &self.preset_file {
            Some(path) => path.clone(),
            None => {
                write!(self.output, "Please enter the file name to load: ")?;
                self.output.flush()?;
                match self.read_line()? {
                    Some(line) => PathBuf::from(line.trim()),
                    None => return Ok(()),
                }
            }
        };

        match validator::validate_file(&path, self.delimiter)
            .and_then(|()| loader::load_file(&path, &mut self.catalog, self.delimiter))
        {
            Ok(loaded) => {
                debug!(loaded, "shell load complete");
                writeln!(self.output, "Courses loaded successfully!")?;
            }
            Err(e) => {
                writeln!(self.output, "*** ERROR ***")?;
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(())
    }

    /// Selection 2: ordered course list.
    fn list(&mut self) -> CatalogResult<()> {
        for course in self.catalog.iter_inorder() {
            writeln!(self.output, "{}\n", course)?;
        }
        Ok(())
    }

    /// Selection 3: single course lookup.
    fn show(&mut self) -> CatalogResult<()> {
        write!(self.output, "What course do you want to know about? ")?;
        self.output.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let number = line.trim();
        match self.catalog.search(number) {
            Some(course) => writeln!(self.output, "{}\n", course)?,
            None => writeln!(self.output, "Course Number not found!")?,
        }
        Ok(())
    }

}

impl Shell<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Shell wired to the real terminal.
    pub fn on_stdio(preset_file: Option<&Path>, delimiter: char) -> Self {
        Shell::new(
            std::io::stdin().lock(),
            std::io::stdout(),
            delimiter,
            preset_file.map(Path::to_path_buf),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_selection_keeps_the_loop_alive() {
        let input = b"7\n9\n" as &[u8];
        let mut output = Vec::new();
        let mut shell = Shell::new(input, &mut output, ',', None);
        shell.run().unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("7 is not a valid option."));
        // menu printed again after the invalid selection
        assert_eq!(text.matches("What would you like to do?").count(), 2);
    }
}
