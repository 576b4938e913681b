use formwright::{FieldKind, FormBuilder};

fn main() -> anyhow::Result<()> {
    let mut builder = FormBuilder::new();

    let intro = builder.add_info_field()?;
    builder.set_info_text(intro, "Tell us about the workshop.")?;

    let name = builder.add_question_field();
    builder.set_name(name, "Your name")?;

    let rating = builder.add_question_field();
    builder.set_name(rating, "Overall rating")?;
    builder.set_field_kind(rating, FieldKind::Range)?;
    builder.set_range_min(rating, "1")?;
    builder.set_range_max(rating, "10")?;
    builder.set_range_default(rating, "7")?;

    let topics = builder.add_question_field();
    builder.set_name(topics, "Which topics helped you?")?;
    builder.set_field_kind(topics, FieldKind::MultiChoice)?;
    for (index, label) in ["Ownership", "Error handling", "Async"].iter().enumerate() {
        builder.add_choice(topics)?;
        builder.set_choice_label(topics, index, *label)?;
    }

    println!("{}", serde_json::to_string_pretty(&builder.build_schema())?);
    Ok(())
}
