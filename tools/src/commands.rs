use std::io::{self, BufRead};

use anyhow::{anyhow, Result};
use namecase_core::{
    CaseOutput, Config, Gender, LanguageModule, LanguageRegistry, NamePart, SharedLanguage,
};
use serde::Serialize;
use tracing::debug;

pub struct Context<'a> {
    pub registry: &'a LanguageRegistry,
    pub language: &'a str,
    pub config: Config,
    pub json: bool,
}

pub struct DeclineRequest<'a> {
    pub case: Option<&'a str>,
    pub gender: Option<Gender>,
    pub part: Option<NamePart>,
    pub format: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct DeclineReport {
    pub input: String,
    pub language: String,
    pub gender: Option<Gender>,
    pub forms: CaseOutput,
}

#[derive(Debug, Serialize)]
struct GenderReport<'a> {
    input: &'a str,
    gender: Option<Gender>,
}

#[derive(Debug, Serialize)]
struct LanguageReport {
    code: String,
    aliases: Vec<String>,
    cases: Vec<String>,
}

/// Names from the command line, or one per non-blank stdin line.
pub fn inputs(names: Vec<String>) -> Result<Vec<String>> {
    if !names.is_empty() {
        return Ok(names);
    }
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// `None` and `"all"` select every case. Numbers pass through unchecked so
/// an out-of-range index also yields the full paradigm.
pub fn resolve_case(language: &SharedLanguage, case: Option<&str>) -> Result<Option<usize>> {
    let Some(name) = case.map(str::trim) else {
        return Ok(None);
    };
    if name.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    if let Ok(index) = name.parse::<usize>() {
        return Ok(Some(index));
    }
    language
        .case_index(name)
        .map(Some)
        .ok_or_else(|| anyhow!("unknown case {name:?} for language {}", language.code()))
}

pub fn decline_one(ctx: &Context<'_>, name: &str, request: &DeclineRequest<'_>) -> Result<DeclineReport> {
    let language = ctx.registry.get(ctx.language)?;
    let case = resolve_case(&language, request.case)?;
    let mut engine = ctx
        .registry
        .engine_with_config(ctx.language, ctx.config.clone())?;
    if let Some(gender) = request.gender {
        engine.set_gender(gender);
    }

    let forms = match request.part {
        None => {
            let ids = engine.split_full_name(name);
            match request.format {
                Some(template) => engine.formatted(case, template),
                None => engine.formatted_records(case, &ids)?,
            }
        }
        Some(NamePart::Given) => engine.set_given_name(name).given_name_case(case),
        Some(NamePart::Family) => engine.set_family_name(name).family_name_case(case),
        Some(NamePart::Patronymic) => engine.set_patronymic(name).patronymic_case(case),
    };
    let gender = engine.gender();
    debug!(input = name, ?gender, "declined");

    Ok(DeclineReport {
        input: name.to_string(),
        language: language.code().to_string(),
        gender,
        forms,
    })
}

pub fn decline(ctx: &Context<'_>, names: &[String], request: &DeclineRequest<'_>) -> Result<()> {
    let language = ctx.registry.get(ctx.language)?;
    let mut reports = Vec::with_capacity(names.len());
    for name in names {
        reports.push(decline_one(ctx, name, request)?);
    }

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    for report in &reports {
        match &report.forms {
            CaseOutput::Single(form) => println!("{form}"),
            CaseOutput::All(forms) => {
                for (i, form) in forms.iter().enumerate() {
                    let label = language.case_names().get(i).map_or("", String::as_str);
                    println!("{label:>14}  {form}");
                }
                if reports.len() > 1 {
                    println!();
                }
            }
        }
    }
    Ok(())
}

pub fn detect(ctx: &Context<'_>, name: &str) -> Result<Option<Gender>> {
    let mut engine = ctx
        .registry
        .engine_with_config(ctx.language, ctx.config.clone())?;
    engine.split_full_name(name);
    Ok(engine.gender())
}

pub fn gender(ctx: &Context<'_>, names: &[String]) -> Result<()> {
    let mut reports = Vec::with_capacity(names.len());
    for name in names {
        reports.push(GenderReport {
            input: name,
            gender: detect(ctx, name)?,
        });
    }

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    for report in &reports {
        match report.gender {
            Some(gender) => println!("{}\t{gender}", report.input),
            None => println!("{}\tunknown", report.input),
        }
    }
    Ok(())
}

pub fn languages(ctx: &Context<'_>) -> Result<()> {
    let mut reports = Vec::new();
    for code in ctx.registry.codes() {
        let module = ctx.registry.get(code)?;
        reports.push(LanguageReport {
            code: code.to_string(),
            aliases: ctx
                .registry
                .aliases_of(code)
                .into_iter()
                .map(str::to_string)
                .collect(),
            cases: module.case_names().to_vec(),
        });
    }

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    for report in &reports {
        println!(
            "{}\t{} cases\t{}",
            report.code,
            report.cases.len(),
            report.aliases.join(", ")
        );
    }
    Ok(())
}
