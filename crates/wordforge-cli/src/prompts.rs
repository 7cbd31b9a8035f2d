//! Interactive collection of the target profile.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

use wordforge_types::Profile;

/// Prompt for every profile fact. Blank answers skip the fact.
pub fn collect_profile() -> Result<Profile> {
    println!(
        "{} the target profile (leave blank to skip)",
        "Describe".green().bold()
    );

    let first_name = ask("First name")?;
    let last_name = ask("Last name")?;
    let nickname = ask("Nickname")?;
    let birthdate = ask("Birthdate (DDMMYYYY)")?;
    let city = ask("City")?;
    let postal_code = ask("Postal code (5 digits)")?;
    let pet = ask("Pet name")?;
    let keywords = split_keywords(&ask("Extra keywords (comma separated)")?);

    Ok(Profile {
        first_name,
        last_name,
        nickname,
        birthdate,
        city,
        postal_code,
        pet,
        keywords,
    })
}

/// Split a comma-separated keyword answer, dropping blanks.
fn split_keywords(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

fn ask(prompt: &str) -> Result<String> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keywords() {
        assert_eq!(
            split_keywords("alpha, beta ,, gamma "),
            vec!["alpha", "beta", "gamma"]
        );
    }

    #[test]
    fn test_split_keywords_handles_blank_answers() {
        assert!(split_keywords("").is_empty());
        assert!(split_keywords(" , , ").is_empty());
    }
}
