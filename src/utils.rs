/// Maps an arbitrary title to a filesystem-safe folder name: characters
/// forbidden on common filesystems are dropped, spaces become underscores.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}
