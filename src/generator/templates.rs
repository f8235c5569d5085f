use askama::Template;

/// Template data for generating a controller class
#[derive(Template)]
#[template(path = "controller.cs.txt", escape = "none")]
pub struct ControllerTemplate {
    /// Capitalized model name
    pub model: String,
    /// Namespace of the DTO root directory
    pub dto_namespace: String,
    /// Namespace of the service interface directory
    pub iservice_namespace: String,
    /// Namespace of the domain model directory
    pub model_namespace: String,
    /// Namespace of the controller directory
    pub controller_namespace: String,
    /// Configured generic controller base name
    pub generic_name: String,
}

/// Template data for generating a repository interface
#[derive(Template)]
#[template(path = "irepository.cs.txt", escape = "none")]
pub struct IRepositoryTemplate {
    pub model: String,
    pub dto_namespace: String,
    pub model_namespace: String,
    pub irepository_namespace: String,
    /// Configured generic repository interface name
    pub igeneric_name: String,
}

/// Template data for generating a repository implementation
#[derive(Template)]
#[template(path = "repository.cs.txt", escape = "none")]
pub struct RepositoryTemplate {
    pub model: String,
    pub dto_namespace: String,
    pub irepository_namespace: String,
    pub model_namespace: String,
    pub data_namespace: String,
    pub repository_namespace: String,
    /// Configured generic repository base name
    pub generic_name: String,
}

/// Template data for generating a service interface
#[derive(Template)]
#[template(path = "iservice.cs.txt", escape = "none")]
pub struct IServiceTemplate {
    pub model: String,
    pub dto_namespace: String,
    pub model_namespace: String,
    pub iservice_namespace: String,
    /// Configured generic service interface name
    pub igeneric_name: String,
}

/// Template data for generating a service implementation
#[derive(Template)]
#[template(path = "service.cs.txt", escape = "none")]
pub struct ServiceTemplate {
    pub model: String,
    pub dto_namespace: String,
    pub iservice_namespace: String,
    pub irepository_namespace: String,
    pub model_namespace: String,
    pub service_namespace: String,
    /// Configured generic service base name
    pub generic_name: String,
}

/// Template data for generating one data-transfer object
///
/// The class body is not templated: it is extracted from the model source and
/// renamed, so the DTO stays a faithful copy of the single source-of-truth
/// type.
#[derive(Template)]
#[template(path = "dto.cs.txt", escape = "none")]
pub struct DtoTemplate {
    /// Namespace of the per-model DTO subdirectory
    pub dto_namespace: String,
    /// Full renamed class declaration
    pub dto_class: String,
}

/// Template data for generating an object-mapper profile
#[derive(Template)]
#[template(path = "mapper.cs.txt", escape = "none")]
pub struct MapperTemplate {
    pub model: String,
    pub dto_namespace: String,
    pub model_namespace: String,
    pub mapper_namespace: String,
}
