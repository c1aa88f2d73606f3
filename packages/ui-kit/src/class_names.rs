//! Class-name merging.
//!
//! `cn` joins class-name fragments into a single attribute value. Absent
//! and empty fragments are skipped, whitespace is normalized and repeated
//! classes keep their first position.

/// One fragment passed to [`cn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassValue<'a> {
    Classes(&'a str),
    Absent,
}

impl<'a> From<&'a str> for ClassValue<'a> {
    fn from(value: &'a str) -> Self {
        ClassValue::Classes(value)
    }
}

impl<'a> From<&'a String> for ClassValue<'a> {
    fn from(value: &'a String) -> Self {
        ClassValue::Classes(value.as_str())
    }
}

impl<'a> From<Option<&'a str>> for ClassValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(ClassValue::Absent, ClassValue::Classes)
    }
}

impl<'a> From<&'a Option<String>> for ClassValue<'a> {
    fn from(value: &'a Option<String>) -> Self {
        value.as_deref().into()
    }
}

/// Merge class-name fragments into one de-duplicated string.
///
/// # Example
///
/// ```rust
/// use ui_kit::class_names::cn;
///
/// let classes = cn(["w-4 h-4", "  animate-spin h-4 "]);
/// assert_eq!(classes, "w-4 h-4 animate-spin");
///
/// let none: Option<&str> = None;
/// assert_eq!(cn([Some("px-2"), none]), "px-2");
/// ```
pub fn cn<'a, I, V>(inputs: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<ClassValue<'a>>,
{
    let mut merged: Vec<&'a str> = Vec::new();

    for input in inputs {
        if let ClassValue::Classes(fragment) = input.into() {
            for class in fragment.split_whitespace() {
                if !merged.contains(&class) {
                    merged.push(class);
                }
            }
        }
    }

    merged.join(" ")
}

/// Merge fragments of mixed types, e.g. `cn!(BASE, size_classes, &props.class_name)`.
#[macro_export]
macro_rules! cn {
    ($($fragment:expr),* $(,)?) => {
        $crate::class_names::cn([$($crate::class_names::ClassValue::from($fragment)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_normalizes_whitespace() {
        let merged = cn(["\n  bg-white \n  text-white ", "hover:bg-gray-100\t"]);
        assert_eq!(merged, "bg-white text-white hover:bg-gray-100");
    }

    #[test]
    fn test_cn_skips_absent_and_empty() {
        let extra: Option<String> = None;
        let merged = crate::cn!("rounded-full", "", None::<&str>, &extra, "gap-2");
        assert_eq!(merged, "rounded-full gap-2");
    }

    #[test]
    fn test_cn_deduplicates_keeping_first_position() {
        let merged = cn(["px-8 gap-2 py-1.5", "gap-2 min-w-[154px]"]);
        assert_eq!(merged, "px-8 gap-2 py-1.5 min-w-[154px]");
    }

    #[test]
    fn test_cn_is_idempotent() {
        let once = cn(["w-4 h-4", "animate-spin w-4"]);
        let twice = cn([once.as_str()]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_cn_empty_input() {
        let merged = cn(Vec::<&str>::new());
        assert!(merged.is_empty());
    }
}
