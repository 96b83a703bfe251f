use std::collections::HashSet;

use super::record::Record;

/// Two or more records that share a name within one output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollision {
    pub name: String,
    /// Path of every record using `name`, in discovery order.
    pub paths: Vec<String>,
    /// Output the colliding records were destined for.
    pub output: String,
}

/// Find the first repeated name in `records`.
///
/// Records without a name are not checked. Only the first collision is
/// returned since any collision aborts the run.
pub fn find_collision<'a, I>(records: I, output: &str) -> Option<NameCollision>
where
    I: IntoIterator<Item = &'a Record> + Clone,
{
    let mut used_names: HashSet<&str> = HashSet::new();

    for record in records.clone() {
        let Some(name) = record.name.as_deref() else {
            continue;
        };
        if !used_names.insert(name) {
            let paths = records
                .into_iter()
                .filter(|r| r.name.as_deref() == Some(name))
                .map(|r| r.path.clone())
                .collect();
            return Some(NameCollision {
                name: name.to_string(),
                paths,
                output: output.to_string(),
            });
        }
    }

    None
}
