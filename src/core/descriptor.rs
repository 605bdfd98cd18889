use crate::domain::model::Descriptor;

/// Renders the `.gdap` text. Dependency strings are quoted verbatim, no
/// escaping is applied.
pub fn render(descriptor: &Descriptor) -> String {
    let remote = descriptor
        .remote
        .iter()
        .map(|dep| format!("\"{}\"", dep))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "[config]\n\
         \n\
         name=\"{name}\"\n\
         binary_type=\"{binary_type}\"\n\
         binary=\"{binary}\"\n\
         \n\
         [dependencies]\n\
         \n\
         remote=[{remote}]\n",
        name = descriptor.name,
        binary_type = descriptor.binary_type,
        binary = descriptor.binary,
        remote = remote,
    )
}

pub fn generate_descriptor(dependencies: &[String], library_name: &str) -> String {
    render(&Descriptor::new(library_name, dependencies.to_vec()))
}
