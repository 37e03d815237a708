//! Code-snippet notebook - an insert-only, order-preserving collection
//! that lives and dies with the process.

/// One saved snippet
#[derive(Clone, Debug, PartialEq)]
pub struct Snippet {
    /// Unique within the book's lifetime, assigned in generation order
    pub id: u64,
    pub title: String,
    pub code: String,
    pub language: String,
    pub category: String,
}

/// The snippet being composed in the add form
#[derive(Clone, Debug, PartialEq)]
pub struct SnippetDraft {
    pub title: String,
    pub code: String,
    pub language: String,
    pub category: String,
}

impl Default for SnippetDraft {
    fn default() -> Self {
        SnippetDraft {
            title: String::new(),
            code: String::new(),
            language: String::from("JavaScript"),
            category: String::from("Utils"),
        }
    }
}

impl SnippetDraft {
    /// A draft with a blank title or blank code is silently dropped on
    /// append, matching the add form's behavior
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.code.trim().is_empty()
    }
}

/// Ordered snippet collection. `append` returns a new book so the
/// insert-only invariant stays checkable from the outside.
#[derive(Clone, Debug, PartialEq)]
pub struct SnippetBook {
    snippets: Vec<Snippet>,
    next_id: u64,
}

impl SnippetBook {
    pub fn new() -> Self {
        SnippetBook {
            snippets: Vec::new(),
            next_id: 1,
        }
    }

    /// The book every session starts with
    pub fn seeded() -> Self {
        let mut book = SnippetBook::new();
        book = book.append(&SnippetDraft {
            title: String::from("React Hook - useState"),
            code: String::from(
                "const [state, setState] = useState(initialValue);\n\
                 const [count, setCount] = useState(0);",
            ),
            language: String::from("JavaScript"),
            category: String::from("React"),
        });
        book.append(&SnippetDraft {
            title: String::from("Async/Await Function"),
            code: String::from(
                "async function fetchData() {\n\
                 \x20 try {\n\
                 \x20   const response = await fetch(url);\n\
                 \x20   const data = await response.json();\n\
                 \x20   return data;\n\
                 \x20 } catch (error) {\n\
                 \x20   console.error('Error:', error);\n\
                 \x20 }\n\
                 }",
            ),
            language: String::from("JavaScript"),
            category: String::from("Async"),
        })
    }

    /// A new book with the draft appended, or an unchanged copy when the
    /// draft is incomplete. Existing entries are never reordered or
    /// mutated.
    pub fn append(&self, draft: &SnippetDraft) -> SnippetBook {
        if !draft.is_complete() {
            return self.clone();
        }

        let mut next = self.clone();
        next.snippets.push(Snippet {
            id: next.next_id,
            title: draft.title.clone(),
            code: draft.code.clone(),
            language: draft.language.clone(),
            category: draft.category.clone(),
        });
        next.next_id += 1;
        next
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

impl Default for SnippetBook {
    fn default() -> Self {
        Self::seeded()
    }
}
