//! Makefile suggestion and emission.
//!
//! The template is static: fixed compiler, fixed flags, fixed targets. The
//! only variable part is the list of discovered source file names, joined
//! in the order they were found.

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

const DIVIDER: &str = "-------------------------";

/// Render the suggested Makefile for the given source file names.
pub fn render(sources: &[String]) -> String {
    format!(
        r#"CXX = g++
CXXFLAGS = -std=c++17 -Wall -O2

TARGET = main
SRCS = {}
OBJS = $(SRCS:.cpp=.o)

all: $(TARGET)

$(TARGET): $(OBJS)
	$(CXX) $(CXXFLAGS) -o $(TARGET) $(OBJS)

clean:
	rm -f $(TARGET) $(OBJS)
"#,
        sources.join(" ")
    )
}

/// Print the Makefile suggestion block.
pub fn print_suggestion(sources: &[String]) {
    println!("\n{} Suggested Makefile:", "🛠");
    println!("{}", DIVIDER);
    print!("{}", render(sources));
    println!("{}", DIVIDER);
}

/// Write the suggested Makefile into `dir`.
///
/// Refuses to overwrite: an existing Makefile gets a warning and is left
/// untouched.
pub fn emit(sources: &[String], dir: &Path) -> Result<()> {
    let target = dir.join("Makefile");

    if target.exists() {
        println!(
            "{} Makefile already exists at {}",
            "!".yellow(),
            target.display()
        );
        return Ok(());
    }

    fs::write(&target, render(sources)).context("Failed to write Makefile")?;

    println!("{} Created Makefile at {}", "✓".green(), target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_sources_in_order() {
        let rendered = render(&["main.cpp".to_string(), "util.c".to_string()]);
        assert!(rendered.contains("SRCS = main.cpp util.c"));
    }

    #[test]
    fn test_render_fixed_template() {
        let rendered = render(&["main.cpp".to_string()]);
        assert!(rendered.contains("CXX = g++"));
        assert!(rendered.contains("CXXFLAGS = -std=c++17 -Wall -O2"));
        assert!(rendered.contains("TARGET = main"));
        assert!(rendered.contains("OBJS = $(SRCS:.cpp=.o)"));
        assert!(rendered.contains("all: $(TARGET)"));
        assert!(rendered.contains("clean:\n\trm -f $(TARGET) $(OBJS)"));
    }

    #[test]
    fn test_emit_writes_makefile() -> Result<()> {
        let dir = tempfile::tempdir()?;
        emit(&["main.cpp".to_string()], dir.path())?;

        let written = fs::read_to_string(dir.path().join("Makefile"))?;
        assert!(written.contains("SRCS = main.cpp"));
        Ok(())
    }

    #[test]
    fn test_emit_does_not_overwrite() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("Makefile");
        fs::write(&target, "# hand-written\n")?;

        emit(&["main.cpp".to_string()], dir.path())?;

        assert_eq!(fs::read_to_string(&target)?, "# hand-written\n");
        Ok(())
    }
}
