//! One generator per artifact kind
//!
//! Each generator computes its target paths, skips any file that already
//! exists, renders the artifact template(s), and, for the kinds that are
//! wired into the dependency-injection container, backs up and patches the
//! corresponding injection list. A generator whose every target pre-exists is
//! an all-or-nothing skip: it touches neither files nor lists.

use anyhow::{bail, Context};
use askama::Template;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{
    ControllerTemplate, DtoTemplate, IRepositoryTemplate, IServiceTemplate, MapperTemplate,
    RepositoryTemplate, ServiceTemplate,
};
use crate::config::Config;
use crate::extractor::rename_declaration;
use crate::patcher::{insert_into_region, REGION_END};
use crate::paths::ProjectPaths;

/// Start marker of the repository wiring region.
pub const REGION_REPOSITORIES: &str = "#region REPOSITORIES";
/// Start marker of the service wiring region.
pub const REGION_SERVICES: &str = "#region SERVICES";
/// Start marker of the mapper wiring region.
pub const REGION_AUTOMAPPER: &str = "#region AUTOMAPPER";

/// Trailer appended to every generated wiring line.
pub const GENERATED_TAG: &str = "/* added by layergen */";

// The placeholder is replaced with the wiring line after region patching, so
// the line's angle brackets and braces never reach the depth counter.
const ENTRY_PLACEHOLDER: &str = "{new-entry}";
const INDENT_UNIT: &str = "\t";

/// Uppercase the first character, leaving the rest of the name untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Write `contents` to `path` unless the file already exists.
///
/// Returns whether a file was created; an existing file is reported as
/// skipped and left byte-for-byte untouched.
fn write_new_file(path: &Path, contents: &str, what: &str) -> anyhow::Result<bool> {
    if path.exists() {
        println!("⚠️  Skipping existing {what}: {}", path.display());
        return Ok(false);
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write {what}: {}", path.display()))?;
    println!("✅ Generated {what}: {}", path.display());
    Ok(true)
}

fn require_base_class(dir: &Path, name: &str, what: &str) -> anyhow::Result<()> {
    if !dir.join(format!("{name}.cs")).exists() {
        bail!("{what} base class {name}.cs not found at {}", dir.display());
    }
    Ok(())
}

fn backup_path(list_path: &Path) -> PathBuf {
    let mut backup = list_path.as_os_str().to_owned();
    backup.push(".bak");
    PathBuf::from(backup)
}

/// Back up an injection list, insert one wiring line into its region, and
/// write the patched file back.
fn patch_injection_list(list_path: &Path, region: &str, line: &str) -> anyhow::Result<()> {
    let content = fs::read_to_string(list_path)
        .with_context(|| format!("failed to read injection list: {}", list_path.display()))?;
    fs::copy(list_path, backup_path(list_path))
        .with_context(|| format!("failed to back up injection list: {}", list_path.display()))?;

    let patched = insert_into_region(&content, region, REGION_END, ENTRY_PLACEHOLDER, INDENT_UNIT)
        .with_context(|| format!("failed to patch injection list: {}", list_path.display()))?
        .replace(ENTRY_PLACEHOLDER, line);

    fs::write(list_path, patched)
        .with_context(|| format!("failed to write injection list: {}", list_path.display()))?;
    println!("✅ Updated injection list: {}", list_path.display());
    Ok(())
}

/// Generate `{Model}Controller.cs` in the configured controller directory.
pub fn make_controller(config: &Config, paths: &ProjectPaths, name: &str) -> anyhow::Result<()> {
    let model = capitalize(name);
    let target = paths.controllers.join(format!("{model}Controller.cs"));
    let rendered = ControllerTemplate {
        dto_namespace: paths.namespace_from_root(&paths.dto),
        iservice_namespace: paths.namespace_from_root(&paths.iservice),
        model_namespace: paths.namespace_from_root(&paths.model),
        controller_namespace: paths.namespace_from_root(&paths.controllers),
        generic_name: config.get_str("CONTROLLERS.GENERIC_NAME")?.to_string(),
        model,
    }
    .render()?;
    write_new_file(&target, &rendered, "controller")?;
    Ok(())
}

/// Generate the `I{Model}Repository` / `{Model}Repository` pair and wire it
/// into the repository injection list.
pub fn make_repository(config: &Config, paths: &ProjectPaths, name: &str) -> anyhow::Result<()> {
    let model = capitalize(name);

    require_base_class(
        &paths.irepository,
        config.get_str("REPOSITORY.IGENERIC_NAME")?,
        "repository interface",
    )?;
    let interface_path = paths.irepository.join(format!("I{model}Repository.cs"));
    let rendered = IRepositoryTemplate {
        dto_namespace: paths.namespace_from_root(&paths.dto),
        model_namespace: paths.namespace_from_root(&paths.model),
        irepository_namespace: paths.namespace_from_root(&paths.irepository),
        igeneric_name: config.get_str("REPOSITORY.IGENERIC_NAME")?.to_string(),
        model: model.clone(),
    }
    .render()?;
    let interface_created = write_new_file(&interface_path, &rendered, "repository interface")?;

    require_base_class(
        &paths.repository,
        config.get_str("REPOSITORY.GENERIC_NAME")?,
        "repository implementation",
    )?;
    let impl_path = paths.repository.join(format!("{model}Repository.cs"));
    let rendered = RepositoryTemplate {
        dto_namespace: paths.namespace_from_root(&paths.dto),
        irepository_namespace: paths.namespace_from_root(&paths.irepository),
        model_namespace: paths.namespace_from_root(&paths.model),
        data_namespace: paths.namespace_from_root(&paths.data),
        repository_namespace: paths.namespace_from_root(&paths.repository),
        generic_name: config.get_str("REPOSITORY.GENERIC_NAME")?.to_string(),
        model: model.clone(),
    }
    .render()?;
    let impl_created = write_new_file(&impl_path, &rendered, "repository implementation")?;

    if !interface_created && !impl_created {
        println!("ℹ️  Repository already exists, injection list not updated");
        return Ok(());
    }

    let variable = config.get_str("REPOSITORY.REPOSITORY_VARIABLE")?;
    let line =
        format!("{variable}.AddScoped<I{model}Repository, {model}Repository>(); {GENERATED_TAG}");
    patch_injection_list(&paths.repository_list, REGION_REPOSITORIES, &line)
}

/// Generate the `I{Model}Service` / `{Model}Service` pair and wire it into
/// the service injection list.
pub fn make_service(config: &Config, paths: &ProjectPaths, name: &str) -> anyhow::Result<()> {
    let model = capitalize(name);

    require_base_class(
        &paths.iservice,
        config.get_str("SERVICE.IGENERIC_NAME")?,
        "service interface",
    )?;
    let interface_path = paths.iservice.join(format!("I{model}Service.cs"));
    let rendered = IServiceTemplate {
        dto_namespace: paths.namespace_from_root(&paths.dto),
        model_namespace: paths.namespace_from_root(&paths.model),
        iservice_namespace: paths.namespace_from_root(&paths.iservice),
        igeneric_name: config.get_str("SERVICE.IGENERIC_NAME")?.to_string(),
        model: model.clone(),
    }
    .render()?;
    let interface_created = write_new_file(&interface_path, &rendered, "service interface")?;

    require_base_class(
        &paths.service,
        config.get_str("SERVICE.GENERIC_NAME")?,
        "service implementation",
    )?;
    let impl_path = paths.service.join(format!("{model}Service.cs"));
    let rendered = ServiceTemplate {
        dto_namespace: paths.namespace_from_root(&paths.dto),
        iservice_namespace: paths.namespace_from_root(&paths.iservice),
        irepository_namespace: paths.namespace_from_root(&paths.irepository),
        model_namespace: paths.namespace_from_root(&paths.model),
        service_namespace: paths.namespace_from_root(&paths.service),
        generic_name: config.get_str("SERVICE.GENERIC_NAME")?.to_string(),
        model: model.clone(),
    }
    .render()?;
    let impl_created = write_new_file(&impl_path, &rendered, "service implementation")?;

    if !interface_created && !impl_created {
        println!("ℹ️  Service already exists, injection list not updated");
        return Ok(());
    }

    let variable = config.get_str("SERVICE.SERVICE_VARIABLE")?;
    let line = format!("{variable}.AddScoped<I{model}Service, {model}Service>(); {GENERATED_TAG}");
    patch_injection_list(&paths.service_list, REGION_SERVICES, &line)
}

/// Generate the read and write DTO shapes from the model source file.
///
/// Both DTOs are derived from the same class body; only the declaration
/// header differs (`Get{Model}Dto` for the read shape, `{Model}Dto` for the
/// write shape). They land in a per-model subdirectory, created on demand.
pub fn make_dto(paths: &ProjectPaths, name: &str) -> anyhow::Result<()> {
    let model = capitalize(name);
    let folder = paths.dto.join(&model);
    if !folder.exists() {
        println!("ℹ️  Creating DTO folder: {}", folder.display());
        fs::create_dir_all(&folder)
            .with_context(|| format!("failed to create DTO folder: {}", folder.display()))?;
    }

    let model_path = paths.model.join(format!("{model}.cs"));
    let source = fs::read_to_string(&model_path)
        .with_context(|| format!("failed to read model class: {}", model_path.display()))?;
    let dto_namespace = paths.namespace_from_root(&folder);

    for class_name in [format!("Get{model}Dto"), format!("{model}Dto")] {
        let target = folder.join(format!("{class_name}.cs"));
        let dto_class = rename_declaration(&source, &class_name)
            .with_context(|| format!("failed to derive {class_name} from {}", model_path.display()))?;
        let rendered = DtoTemplate {
            dto_namespace: dto_namespace.clone(),
            dto_class,
        }
        .render()?;
        write_new_file(&target, &rendered, "DTO")?;
    }
    Ok(())
}

/// Generate `{Model}Mapper.cs` and wire it into the mapper injection list.
pub fn make_mapper(config: &Config, paths: &ProjectPaths, name: &str) -> anyhow::Result<()> {
    let model = capitalize(name);
    let target = paths.mapper.join(format!("{model}Mapper.cs"));
    let rendered = MapperTemplate {
        dto_namespace: paths.namespace_from_root(&paths.dto),
        model_namespace: paths.namespace_from_root(&paths.model),
        mapper_namespace: paths.namespace_from_root(&paths.mapper),
        model: model.clone(),
    }
    .render()?;
    let created = write_new_file(&target, &rendered, "mapper")?;
    if !created {
        println!("ℹ️  Mapper already exists, injection list not updated");
        return Ok(());
    }

    let variable = config.get_str("MAPPER.SERVICE_VARIABLE")?;
    let line = format!("{variable}.AddAutoMapper(typeof({model}Mapper)); {GENERATED_TAG}");
    patch_injection_list(&paths.mapper_list, REGION_AUTOMAPPER, &line)
}
