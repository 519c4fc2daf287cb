//! Interactive front end: compare two passwords, check both for breaches,
//! optionally generate a new one.

use anyhow::Result;
use inquire::{Confirm, Password, PasswordDisplayMode};
use pwd_audit::{
    BreachChecker, BreachStatus, Comparison, CriteriaResult, DEFAULT_LENGTH, PairReport,
    generate_password,
};
use secrecy::{ExposeSecret, SecretString};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let checker = BreachChecker::new()?;

    println!("🔐 Password Strength Analyzer");

    loop {
        let first = prompt_password("🔑 Enter first password:")?;
        let second = prompt_password("🔑 Enter second password:")?;

        let report = PairReport::build(&first, &second, &checker);
        print_report(&report);

        if Confirm::new("🔑 Generate a strong password?")
            .with_default(false)
            .prompt()?
        {
            let generated = generate_password(DEFAULT_LENGTH)?;
            println!("Secure password: {}", generated.expose_secret());
        }

        if !Confirm::new("🔄 Compare another pair?")
            .with_default(false)
            .prompt()?
        {
            break;
        }
    }

    Ok(())
}

fn prompt_password(message: &str) -> Result<SecretString> {
    let password = Password::new(message)
        .with_display_mode(PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;
    Ok(SecretString::new(password.into()))
}

fn print_report(report: &PairReport) {
    println!();
    println!("Strength comparison");
    print_score("Password 1", &report.first);
    print_score("Password 2", &report.second);

    match report.comparison {
        Comparison::FirstStronger => println!("✅ First password is stronger!"),
        Comparison::SecondStronger => println!("✅ Second password is stronger!"),
        Comparison::Equal => println!("⚖️ Both passwords have the same strength."),
    }

    println!();
    print_breach("First", &report.first_breach);
    print_breach("Second", &report.second_breach);
    println!();
}

fn print_score(label: &str, criteria: &CriteriaResult) {
    println!(
        "🔹 {} score: {}/5 ({})",
        label,
        criteria.score(),
        criteria.strength()
    );

    let missing = criteria.missing();
    if !missing.is_empty() {
        let reasons: Vec<_> = missing.iter().map(|c| c.reason()).collect();
        println!("   Missing: {}", reasons.join(", "));
    }
}

fn print_breach(label: &str, status: &BreachStatus) {
    match status {
        BreachStatus::Breached => {
            println!("⚠️ {} password has been found in a data breach!", label)
        }
        BreachStatus::Clean => println!("✅ {} password was not found in known breaches.", label),
        BreachStatus::Unknown(reason) => {
            println!("❓ {} password breach status unknown: {}", label, reason)
        }
    }
}
