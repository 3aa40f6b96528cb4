use crate::cli::OutputFormat;
use endoflife_core::{
    Date, FullProductListResponse, IdentifierListResponse, ProductListResponse,
    ProductRelease, ProductReleaseResponse, ProductResponse, UriListResponse,
};
use serde::Serialize;
use std::fmt::{self, Write};

/// Human-readable rendering for `--format text`
pub trait TextOutput {
    fn to_text(&self) -> Result<String, fmt::Error>;
}

/// Render a response in the requested format
pub fn render<T>(value: &T, format: OutputFormat) -> anyhow::Result<String>
where
    T: Serialize + TextOutput,
{
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Text => value.to_text()?,
    })
}

fn date_or_dash(date: &Date) -> String {
    if date.is_absent() {
        "-".to_string()
    } else {
        date.to_string()
    }
}

fn release_status(release: &ProductRelease) -> &'static str {
    if release.is_eol {
        "eol"
    } else if release.is_maintained {
        "maintained"
    } else {
        "unmaintained"
    }
}

fn release_row(out: &mut String, release: &ProductRelease) -> fmt::Result {
    writeln!(
        out,
        "  {:<12} {:<12} {:<12} {:<14} {}",
        release.name,
        date_or_dash(&release.release_date),
        date_or_dash(&release.eol_from),
        release_status(release),
        release.latest_version().unwrap_or("-"),
    )
}

fn release_header(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        "  {:<12} {:<12} {:<12} {:<14} {}",
        "RELEASE", "RELEASED", "EOL", "STATUS", "LATEST"
    )
}

impl TextOutput for UriListResponse {
    fn to_text(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        for uri in &self.result {
            writeln!(out, "{:<24} {}", uri.name, uri.uri)?;
        }
        write!(out, "{} total", self.total)?;
        Ok(out)
    }
}

impl TextOutput for ProductListResponse {
    fn to_text(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        for product in &self.result {
            writeln!(
                out,
                "{:<24} {:<32} {}",
                product.name, product.label, product.category
            )?;
        }
        write!(out, "{} products", self.total)?;
        Ok(out)
    }
}

impl TextOutput for FullProductListResponse {
    fn to_text(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        for product in &self.result {
            let maintained = product.maintained_releases().count();
            writeln!(
                out,
                "{:<24} {:>3} releases, {:>3} maintained",
                product.name,
                product.releases.len(),
                maintained
            )?;
        }
        write!(out, "{} products", self.total)?;
        Ok(out)
    }
}

impl TextOutput for ProductResponse {
    fn to_text(&self) -> Result<String, fmt::Error> {
        let product = &self.result;
        let mut out = String::new();
        writeln!(out, "{} ({})", product.label, product.name)?;
        writeln!(out, "category: {}", product.category)?;
        writeln!(out, "link:     {}", product.links.html)?;
        if let Some(command) = &product.version_command {
            writeln!(out, "version:  {command}")?;
        }
        writeln!(out)?;
        release_header(&mut out)?;
        for release in &product.releases {
            release_row(&mut out, release)?;
        }
        Ok(out.trim_end().to_string())
    }
}

impl TextOutput for ProductReleaseResponse {
    fn to_text(&self) -> Result<String, fmt::Error> {
        let release = &self.result;
        let mut out = String::new();
        writeln!(out, "{}", release.label)?;
        writeln!(out, "released:     {}", date_or_dash(&release.release_date))?;
        if release.is_lts || release.lts_from.is_present() {
            writeln!(out, "lts from:     {}", date_or_dash(&release.lts_from))?;
        }
        writeln!(out, "active until: {}", date_or_dash(&release.eoas_from))?;
        writeln!(out, "eol:          {}", date_or_dash(&release.eol_from))?;
        if release.is_eoes.is_some() {
            writeln!(out, "extended:     {}", date_or_dash(&release.eoes_from))?;
        }
        writeln!(out, "status:       {}", release_status(release))?;
        if let Some(latest) = &release.latest {
            writeln!(
                out,
                "latest:       {} ({})",
                latest.name,
                date_or_dash(&latest.date)
            )?;
        }
        Ok(out.trim_end().to_string())
    }
}

impl TextOutput for IdentifierListResponse {
    fn to_text(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        for mapping in &self.result {
            writeln!(out, "{:<48} {}", mapping.identifier, mapping.product.name)?;
        }
        write!(out, "{} identifiers", self.total)?;
        Ok(out)
    }
}
