//! `webgenie` — terminal questionnaire that generates and publishes a website.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sitegen::ai::AnthropicModel;
use sitegen::hosts::{NetlifyHost, VercelHost};
use sitegen::{
    default_questions, generate_site, write_archive, AnswerValue, Deployer, GeneratedSite,
    Question, QuestionKind, Questionnaire, Step,
};

#[derive(Parser)]
#[command(name = "webgenie", about = "Generate a website from a questionnaire")]
struct Cli {
    /// Publish the generated site (Netlify first, then Vercel)
    #[arg(long)]
    deploy: bool,

    /// Export the generated site as a zip archive at this path
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Print the generated code instead of just a summary
    #[arg(long)]
    show_code: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webgenie=info,sitegen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let term = Term::stdout();

    // Fail fast on the one required credential, before asking questions.
    let model = AnthropicModel::from_env()
        .context("ANTHROPIC_API_KEY must be set to generate a website")?;

    println!("{}", "WebGenie".bright_magenta().bold());
    println!("Answer a few questions and get a complete website.\n");

    let answers = run_questionnaire(&term)?;

    println!("\n{}", "Generating your website...".bright_blue());
    let site = generate_site(&model, &answers).await?;

    if site.is_empty() {
        println!(
            "{}",
            "The model returned no code. Please try again with more detail.".bright_red()
        );
        return Ok(());
    }

    print_summary(&site, cli.show_code);

    if let Some(path) = &cli.export {
        let archive = write_archive(&site)?;
        std::fs::write(path, archive)
            .with_context(|| format!("failed to write archive to {}", path.display()))?;
        println!("Exported to {}", style(path.display()).green());
    }

    if cli.deploy {
        println!("\n{}", "Publishing...".bright_blue());
        let deployer = Deployer::new()
            .with_host(NetlifyHost::from_env())
            .with_host(VercelHost::from_env());

        match deployer.deploy(&site).await {
            Ok(deployment) => {
                println!(
                    "Live on {}: {}",
                    deployment.host,
                    style(&deployment.url).green().bold()
                );
            }
            Err(err) => {
                println!("{} {}", "Deployment failed:".bright_red(), err);
            }
        }
    }

    Ok(())
}

/// Walk the fixed question list, one prompt per question.
fn run_questionnaire(term: &Term) -> Result<sitegen::AnswerSet> {
    let mut flow = Questionnaire::new(default_questions());
    let theme = ColorfulTheme::default();

    loop {
        let question = match flow.current_question() {
            Some(q) => q.clone(),
            None => break,
        };

        println!(
            "{}",
            style(format!("[{}/{}]", flow.current_index() + 1, flow.len())).dim()
        );

        let answer = ask(term, &theme, &question)?;
        flow.record(answer);

        if flow.next() == Step::Complete {
            break;
        }
    }

    Ok(flow.finalize())
}

fn ask(term: &Term, theme: &ColorfulTheme, question: &Question) -> Result<AnswerValue> {
    let answer = match &question.kind {
        QuestionKind::Select { options } => {
            let index = Select::with_theme(theme)
                .with_prompt(&question.label)
                .items(options)
                .default(0)
                .interact_on(term)?;
            AnswerValue::Selection(options[index].clone())
        }
        QuestionKind::MultiSelect { options } => {
            let picked = MultiSelect::with_theme(theme)
                .with_prompt(&question.label)
                .items(options)
                .interact_on(term)?;
            AnswerValue::Multi(picked.into_iter().map(|i| options[i].clone()).collect())
        }
        QuestionKind::Text | QuestionKind::LongText => {
            let text: String = Input::with_theme(theme)
                .with_prompt(&question.label)
                .allow_empty(true)
                .interact_text_on(term)?;
            AnswerValue::Text(text)
        }
        QuestionKind::Toggle => {
            let yes = Confirm::with_theme(theme)
                .with_prompt(&question.label)
                .default(true)
                .interact_on(term)?;
            AnswerValue::Toggle(yes)
        }
    };
    Ok(answer)
}

fn print_summary(site: &GeneratedSite, show_code: bool) {
    println!("{}", "Website generated.".bright_green().bold());
    println!(
        "  index.html  {} bytes\n  styles.css  {} bytes\n  script.js   {} bytes",
        site.html.len(),
        site.css.len(),
        site.js.len()
    );

    if show_code {
        println!("\n{}\n{}", style("--- index.html ---").dim(), site.html);
        println!("\n{}\n{}", style("--- styles.css ---").dim(), site.css);
        println!("\n{}\n{}", style("--- script.js ---").dim(), site.js);
    }
}
