use recipebook::browser::{BrowserClient, Outcome};
use recipebook::lifecycle::{setup_tracing, Config, RecipeBook};
use recipebook::view::{FieldKind, Page};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, info_span, Instrument};

const HELP: &str = "commands: show | links | follow <n> | fill <field> <value...> | submit | html | quit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Config::from_env()?;
    let book = RecipeBook::connect(&config)?;
    info!(api_root = book.api_root(), "Connected");

    browse(&book).instrument(info_span!("browse")).await?;

    book.shutdown().await?;
    Ok(())
}

async fn browse(book: &RecipeBook) -> Result<(), Box<dyn std::error::Error>> {
    report(book.start().await?);
    println!("{}", describe(&book.browser.page().await?));
    println!("{HELP}");
    repl(&book.browser).await
}

async fn repl(browser: &BrowserClient) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else { continue };

        match command {
            "show" => println!("{}", describe(&browser.page().await?)),
            "links" => {
                let page = browser.page().await?;
                for (i, link) in page.links().iter().enumerate() {
                    println!("[{i}] {} -> {} ({})", link.text, link.href, link.route);
                }
            }
            "follow" => {
                let page = browser.page().await?;
                let link = words
                    .next()
                    .and_then(|n| n.parse::<usize>().ok())
                    .and_then(|n| page.links().get(n).map(|l| (*l).clone()));
                match link {
                    Some(link) => {
                        report(browser.follow(&link).await?);
                        println!("{}", describe(&browser.page().await?));
                    }
                    None => println!("no such link; try `links`"),
                }
            }
            "fill" => {
                let Some(field) = words.next() else {
                    println!("usage: fill <field> <value...>");
                    continue;
                };
                let value = words.collect::<Vec<_>>().join(" ");
                if let Err(e) = browser.fill(field, &value).await {
                    println!("{e}");
                }
            }
            "submit" => {
                report(browser.submit().await?);
                println!("{}", describe(&browser.page().await?));
            }
            "html" => println!("{}", browser.html().await?),
            "quit" | "exit" => break,
            _ => println!("{HELP}"),
        }
    }
    Ok(())
}

fn report(outcome: Outcome) {
    match outcome {
        Outcome::Failed(message) => error!(%message, "Request failed"),
        Outcome::Blocked { field } => println!("`{field}` is required"),
        Outcome::NotWired => println!("saving users is not supported yet"),
        other => info!(outcome = ?other, "Done"),
    }
}

/// Plain-text view of the page.
fn describe(page: &Page) -> String {
    let mut out = Vec::new();
    if let Some(notification) = &page.notification {
        out.push(format!("[{}] {}", notification.kind.class(), notification.text));
    }
    if let Some(back) = &page.navigation {
        out.push(format!("<< {}", back.text));
    }
    if let Some(title) = &page.content_title {
        out.push(format!("== {title} =="));
    }
    for para in &page.content_data {
        match &para.link {
            Some(link) => out.push(format!("{}[{}]", para.text, link.text)),
            None => out.push(para.text.clone()),
        }
    }
    if !page.table_head.is_empty() {
        out.push(page.table_head.join(" | "));
    }
    for row in &page.table_rows {
        out.push(format!("{} | [{}]", row.label, row.action.text));
    }
    if let Some(text) = &page.content_before_form {
        out.push(text.clone());
    }
    if let Some(form) = &page.form {
        for field in &form.fields {
            let marker = if field.required { "*" } else { "" };
            let kind = match field.kind {
                FieldKind::Input => "",
                FieldKind::TextArea { .. } => " (long)",
            };
            out.push(format!("  {}{marker}{kind}: {}", field.label, field.value));
        }
        out.push(format!("  [{}]", form.submit_label));
    }
    out.join("\n")
}
