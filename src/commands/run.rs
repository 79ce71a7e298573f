use crate::cli::{Cli, Commands, Locale};
use crate::domain::constants::{
    PLACEHOLDER_PAGE_FILE, SITE_PAGE_FILE, STATUS_ERROR, STATUS_NOT_FOUND, STATUS_OK,
};
use crate::domain::models::{Guidance, PhotoSet, RunReport, StepReport};
use crate::services::gallery::generate_gallery;
use crate::services::output::print_one;
use crate::services::patcher::patch_index;
use crate::services::storage::{audit, DiskFs, SiteFs, StepError};

pub fn handle_command(cli: &Cli) -> anyhow::Result<()> {
    let mut fs = DiskFs::new(&cli.dir);
    let photos = PhotoSet::default();
    tracing::info!("site directory {}", fs.root().display());

    let report = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => RunReport {
            steps: vec![
                generate_step(&mut fs, &photos, cli.lang),
                patch_step(&mut fs, &photos, cli.lang),
            ],
            guidance: Some(guidance(&cli.base_url)),
        },
        Commands::Generate => RunReport {
            steps: vec![generate_step(&mut fs, &photos, cli.lang)],
            guidance: None,
        },
        Commands::Patch => RunReport {
            steps: vec![patch_step(&mut fs, &photos, cli.lang)],
            guidance: None,
        },
    };

    report.steps.iter().for_each(record);
    let ok = report.ok();
    print_one(cli.json, ok, &report, |r| render_text(r))?;

    if !ok {
        let failed = report.steps.iter().filter(|s| s.failed()).count();
        anyhow::bail!("{} step(s) failed", failed);
    }
    Ok(())
}

fn generate_step(fs: &mut impl SiteFs, photos: &PhotoSet, lang: Locale) -> StepReport {
    match generate_gallery(fs, photos, lang) {
        Ok(path) => StepReport {
            step: "generate".to_string(),
            path: path.display().to_string(),
            status: STATUS_OK.to_string(),
            replacements: None,
            message: format!("created placeholder page: {}", PLACEHOLDER_PAGE_FILE),
        },
        Err(e) => failed_step("generate", &*fs, PLACEHOLDER_PAGE_FILE, e),
    }
}

fn patch_step(fs: &mut impl SiteFs, photos: &PhotoSet, lang: Locale) -> StepReport {
    match patch_index(fs, photos, lang) {
        Ok(outcome) => StepReport {
            step: "patch".to_string(),
            path: outcome.path.display().to_string(),
            status: STATUS_OK.to_string(),
            replacements: Some(outcome.replacements),
            message: format!(
                "updated {} with {} placeholder(s)",
                SITE_PAGE_FILE, outcome.replacements
            ),
        },
        Err(e) => failed_step("patch", &*fs, SITE_PAGE_FILE, e),
    }
}

fn failed_step(step: &str, fs: &impl SiteFs, file: &str, err: StepError) -> StepReport {
    let status = match err {
        StepError::InputNotFound(_) => STATUS_NOT_FOUND,
        _ => STATUS_ERROR,
    };
    let message = match err {
        StepError::InputNotFound(_) => format!("{} not found", file),
        ref other => other.to_string(),
    };
    tracing::warn!("{} step {}: {}", step, status, err);
    StepReport {
        step: step.to_string(),
        path: fs.path(file).display().to_string(),
        status: status.to_string(),
        replacements: None,
        message,
    }
}

fn record(step: &StepReport) {
    tracing::info!("{} -> {}", step.step, step.status);
    audit(
        &step.step,
        serde_json::json!({
            "path": step.path,
            "status": step.status,
            "replacements": step.replacements,
        }),
    );
}

fn guidance(base_url: &str) -> Guidance {
    let mut base = base_url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Guidance {
        placeholders_url: format!("{}{}", base, PLACEHOLDER_PAGE_FILE),
        site_url: base,
    }
}

fn render_text(report: &RunReport) -> String {
    let mut lines = Vec::new();
    if report.guidance.is_some() {
        lines.push("Creating photo placeholders...".to_string());
    }
    for step in &report.steps {
        let mark = if step.status == STATUS_OK { "✓" } else { "✗" };
        lines.push(format!("{} {}", mark, step.message));
    }
    if let Some(g) = &report.guidance {
        lines.push(String::new());
        lines.push("✓ Photo placeholders finished!".to_string());
        lines.push(String::new());
        lines.push("Open the site at:".to_string());
        lines.push(format!("   {}", g.site_url));
        lines.push(String::new());
        lines.push("See the placeholder instructions at:".to_string());
        lines.push(format!("   {}", g.placeholders_url));
    }
    lines.join("\n")
}
