use std::fmt::Write;

use anyhow::Result;
use libhasm::{AssemblyJob, GlobalSymbols, ModuleSource};
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    modules: &'a [ModuleSource],
    #[serde(skip_serializing_if = "Option::is_none")]
    globals: Option<&'a GlobalSymbols>,
}

/// Usage then definition table of every module, as plain text.
pub fn render_text(job: &AssemblyJob, globals: Option<&GlobalSymbols>) -> Result<String> {
    let mut out = String::new();

    for module in job.modules() {
        writeln!(out, "{}", module.name())?;
        writeln!(out, "usage table")?;
        write!(out, "{}", module.usages())?;
        writeln!(out, "definition table")?;
        write!(out, "{}", module.definitions())?;
    }

    if let Some(globals) = globals {
        writeln!(out, "global symbols")?;
        for (symbol, def) in globals.iter() {
            writeln!(out, "{} {} {}:{}", symbol, def.module, def.line, def.offset)?;
        }
    }

    Ok(out)
}

pub fn render_json(job: &AssemblyJob, globals: Option<&GlobalSymbols>) -> Result<String> {
    let report = Report {
        modules: job.modules(),
        globals,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use libhasm::{link, scan_modules};

    use super::*;

    fn job() -> AssemblyJob {
        scan_modules([("a.asm", "L: LOAD N\nJMP L\nN: SPACE")])
    }

    #[test]
    fn text() {
        let job = job();
        assert_eq!(
            render_text(&job, None).unwrap(),
            "a.asm\nusage table\nN 0:8\nL 1:4\ndefinition table\nL 0:0\nN 2:0\n"
        );

        let globals = link(job.modules()).unwrap();
        let text = render_text(&job, Some(&globals)).unwrap();
        assert!(text.ends_with("global symbols\nL a.asm 0:0\nN a.asm 2:0\n"));
    }

    #[test]
    fn json() {
        let job = job();
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&job, None).unwrap()).unwrap();

        let module = &value["modules"][0];
        assert_eq!(module["name"], "a.asm");
        assert_eq!(module["definitions"]["N"]["line"], 2);
        assert_eq!(module["usages"]["L"][0]["offset"], 4);
        assert!(value.get("globals").is_none());
    }
}
