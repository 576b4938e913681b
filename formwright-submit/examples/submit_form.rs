use formwright::{FieldKind, FormBuilder};
use formwright_submit::{SubmitClient, SubmitFlags, SubmitOptions, SubmitOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let endpoint = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:5000/forms/new".to_string());

    let mut builder = FormBuilder::new();
    let rating = builder.add_question_field();
    builder.set_name(rating, "How was it?")?;
    builder.set_field_kind(rating, FieldKind::Range)?;
    builder.set_range_min(rating, "1")?;
    builder.set_range_max(rating, "5")?;
    builder.set_range_default(rating, "3")?;

    let options = SubmitOptions::new().with_flags(SubmitFlags {
        hide_results: false,
        disallow_anon_answer: true,
    });

    let client = SubmitClient::new(&endpoint)?;
    match client.submit(&builder.build_schema(), &options).await? {
        SubmitOutcome::Redirect(url) => println!("accepted, go to {url}"),
        SubmitOutcome::Rejected(message) => println!("rejected: {message}"),
        SubmitOutcome::ErrorPage(_) => println!("server error page returned"),
    }
    Ok(())
}
