use chrono::{DateTime, Utc};
use vocab_core::create::NewEntry;
use vocab_core::responses::CreateResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vocab add`.
pub fn handle(
    args: &AddArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let response = run(args, ctx, now)?;
    output(&response, flags.format)
}

fn run(args: &AddArgs, ctx: &AppContext, now: DateTime<Utc>) -> anyhow::Result<CreateResponse> {
    let new = new_entry(args);
    let stored = ctx.service.create_entry(new, now)?;
    Ok(CreateResponse {
        path: ctx.service.store().layout().display_path(&stored.path),
        entry: stored.entry,
    })
}

fn new_entry(args: &AddArgs) -> NewEntry {
    NewEntry {
        category: Some(args.entry_type),
        name: args.name.clone(),
        example: args.example.clone(),
        context: args.context.clone(),
        meaning: args.meaning.clone(),
        part_of_speech: args.part_of_speech.clone(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use tempfile::TempDir;
    use vocab_core::entities::Entry;
    use vocab_core::enums::Category;

    use super::*;

    fn args(entry_type: Category, name: &str) -> AddArgs {
        AddArgs {
            entry_type,
            name: name.into(),
            example: None,
            context: None,
            meaning: None,
            part_of_speech: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 4, 12, 0, 0).unwrap()
    }

    #[test]
    fn creates_stub_with_relative_path() {
        let temp = TempDir::new().expect("tempdir should create");
        let ctx = AppContext::init(temp.path()).expect("context should init");

        let mut add = args(Category::Idiom, "Break the ice");
        add.example = Some("She told a joke to break the ice.".into());
        let response = run(&add, &ctx, now()).expect("add should succeed");

        assert_eq!(
            response.path,
            std::path::Path::new("idioms")
                .join("break-the-ice.yaml")
                .display()
                .to_string()
        );
        let Entry::Idiom(idiom) = response.entry else {
            panic!("expected an idiom");
        };
        assert_eq!(idiom.examples, vec!["She told a joke to break the ice."]);
        assert!(temp.path().join("idioms/break-the-ice.yaml").is_file());
    }

    #[test]
    fn terminology_without_context_fails() {
        let temp = TempDir::new().expect("tempdir should create");
        let ctx = AppContext::init(temp.path()).expect("context should init");

        let err = run(&args(Category::Terminology, "sharding"), &ctx, now()).expect_err("should fail");
        assert!(err.to_string().contains("require a context"));
        assert!(!temp.path().join("terminologies").exists());
    }

    #[test]
    fn duplicate_name_fails() {
        let temp = TempDir::new().expect("tempdir should create");
        let ctx = AppContext::init(temp.path()).expect("context should init");

        run(&args(Category::Word, "zeal"), &ctx, now()).expect("first add should succeed");
        let err = run(&args(Category::Word, "Zeal"), &ctx, now()).expect_err("should conflict");
        assert!(err.to_string().contains("already exists"));
    }
}
