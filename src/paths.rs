//! Resolved file-system layout of the target project
//!
//! Derives every directory and injection-list location the generators touch
//! from the configuration, as absolute host-native paths, and checks eagerly
//! that all of them exist before any generation starts.

use crate::config::Config;
use anyhow::bail;
use std::path::{Path, PathBuf};

/// Absolute, separator-normalized locations derived from configuration.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub api: PathBuf,
    pub controllers: PathBuf,
    pub application: PathBuf,
    pub dto: PathBuf,
    pub irepository: PathBuf,
    pub iservice: PathBuf,
    pub mapper: PathBuf,
    pub domain: PathBuf,
    pub model: PathBuf,
    pub infrastructure: PathBuf,
    pub data: PathBuf,
    pub repository: PathBuf,
    pub service: PathBuf,
    pub mapper_list: PathBuf,
    pub repository_list: PathBuf,
    pub service_list: PathBuf,
}

impl ProjectPaths {
    /// Resolve every configured location against the project root.
    pub fn resolve(config: &Config, root: &Path) -> anyhow::Result<Self> {
        let from_namespace = |namespace: &str| -> anyhow::Result<PathBuf> {
            config.resolve_path(config.get_str(namespace)?, root)
        };
        Ok(Self {
            root: root.to_path_buf(),
            api: config.resolve_path("API_PATH", root)?,
            controllers: from_namespace("CONTROLLERS.PATH")?,
            application: config.resolve_path("APPLICATION_PATH", root)?,
            dto: from_namespace("DTO.PATH")?,
            irepository: from_namespace("REPOSITORY.IPATH")?,
            iservice: from_namespace("SERVICE.IPATH")?,
            mapper: from_namespace("MAPPER.PATH")?,
            domain: config.resolve_path("DOMAIN_PATH", root)?,
            model: from_namespace("MODEL.PATH")?,
            infrastructure: config.resolve_path("INFRASTRUCTURE_PATH", root)?,
            data: from_namespace("DATA.PATH")?,
            repository: from_namespace("REPOSITORY.PATH")?,
            service: from_namespace("SERVICE.PATH")?,
            mapper_list: from_namespace("MAPPER.LIST_PATH")?,
            repository_list: from_namespace("REPOSITORY.LIST_PATH")?,
            service_list: from_namespace("SERVICE.LIST_PATH")?,
        })
    }

    /// Fail on the first resolved path that does not exist on disk.
    pub fn validate(&self) -> anyhow::Result<()> {
        println!("ℹ️  Checking project paths...");
        for path in [
            &self.api,
            &self.controllers,
            &self.application,
            &self.dto,
            &self.irepository,
            &self.iservice,
            &self.mapper,
            &self.domain,
            &self.model,
            &self.infrastructure,
            &self.data,
            &self.repository,
            &self.service,
            &self.mapper_list,
            &self.repository_list,
            &self.service_list,
        ] {
            if !path.exists() {
                bail!("path not found: {}", path.display());
            }
        }
        println!("✅ Project paths are valid");
        Ok(())
    }

    /// C# namespace of a location, derived from its path below the root.
    ///
    /// `<root>/APPLICATION/Dto/User` becomes `APPLICATION.Dto.User`.
    pub fn namespace_from_root(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Print the resolved layout, mirroring what a run is about to touch.
    pub fn print_summary(&self, config_path: &Path) {
        println!(
            "\nPROJECT INFO:\n\
             \x20   - CONFIG PATH: {}\n\
             \x20   - API PATH: {}\n\
             \x20       - CONTROLLER PATH: {}\n\
             \x20   - APPLICATION PATH: {}\n\
             \x20       - DTO PATH: {}\n\
             \x20       - IREPOSITORY PATH: {}\n\
             \x20       - ISERVICE PATH: {}\n\
             \x20       - MAPPER PATH: {}\n\
             \x20   - DOMAIN PATH: {}\n\
             \x20       - MODEL PATH: {}\n\
             \x20   - INFRASTRUCTURE PATH: {}\n\
             \x20       - DATA PATH: {}\n\
             \x20       - REPOSITORY PATH: {}\n\
             \x20       - SERVICE PATH: {}\n\
             \x20   - MAPPER LIST: {}\n\
             \x20   - REPOSITORY LIST: {}\n\
             \x20   - SERVICE LIST: {}\n",
            config_path.display(),
            self.api.display(),
            self.controllers.display(),
            self.application.display(),
            self.dto.display(),
            self.irepository.display(),
            self.iservice.display(),
            self.mapper.display(),
            self.domain.display(),
            self.model.display(),
            self.infrastructure.display(),
            self.data.display(),
            self.repository.display(),
            self.service.display(),
            self.mapper_list.display(),
            self.repository_list.display(),
            self.service_list.display(),
        );
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn resolves_against_the_root() {
        let config = Config::defaults();
        let paths = ProjectPaths::resolve(&config, Path::new("/proj")).unwrap();
        assert_eq!(paths.controllers, PathBuf::from("/proj/API/Controllers"));
        assert_eq!(paths.dto, PathBuf::from("/proj/APPLICATION/Dto"));
        assert_eq!(
            paths.repository_list,
            PathBuf::from("/proj/INFRASTRUCTURE/InfraInjector.cs")
        );
        assert_eq!(paths.model, PathBuf::from("/proj/DOMAIN/Model"));
    }

    #[test]
    fn validate_names_the_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::defaults();
        let paths = ProjectPaths::resolve(&config, dir.path()).unwrap();
        let err = paths.validate().unwrap_err();
        assert!(err.to_string().contains("path not found"));
        assert!(err.to_string().contains("API"));
    }

    #[test]
    fn namespace_is_dotted_relative_path() {
        let config = Config::defaults();
        let paths = ProjectPaths::resolve(&config, Path::new("/proj")).unwrap();
        assert_eq!(paths.namespace_from_root(&paths.dto), "APPLICATION.Dto");
        assert_eq!(
            paths.namespace_from_root(&paths.dto.join("User")),
            "APPLICATION.Dto.User"
        );
        assert_eq!(paths.namespace_from_root(&paths.model), "DOMAIN.Model");
    }
}
