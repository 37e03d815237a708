//! Git cheatsheet - a static, read-only command catalog with a
//! category filter.

/// One catalog entry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GitCommand {
    pub command: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

const fn cmd(command: &'static str, description: &'static str, category: &'static str) -> GitCommand {
    GitCommand {
        command,
        description,
        category,
    }
}

/// The full catalog, grouped by category in display order
pub const GIT_COMMANDS: &[GitCommand] = &[
    // Getting Started
    cmd("git init", "Initialize a new repository", "Getting Started"),
    cmd("git clone <url>", "Clone a repository", "Getting Started"),
    cmd("git config --global user.name \"Name\"", "Set global username", "Getting Started"),
    cmd("git config --global user.email \"email\"", "Set global email", "Getting Started"),
    // Basic Commands
    cmd("git add <file>", "Stage a file for commit", "Basic Commands"),
    cmd("git add .", "Stage all files", "Basic Commands"),
    cmd("git commit -m \"message\"", "Commit staged changes", "Basic Commands"),
    cmd("git status", "Show repository status", "Basic Commands"),
    cmd("git log", "Show commit history", "Basic Commands"),
    cmd("git log --oneline", "Show compact commit history", "Basic Commands"),
    // Branching
    cmd("git branch", "List all branches", "Branching"),
    cmd("git branch <name>", "Create a new branch", "Branching"),
    cmd("git checkout <branch>", "Switch to a branch", "Branching"),
    cmd("git checkout -b <name>", "Create and switch to new branch", "Branching"),
    cmd("git merge <branch>", "Merge branch into current", "Branching"),
    cmd("git branch -d <branch>", "Delete a branch", "Branching"),
    // Remote Operations
    cmd("git remote add origin <url>", "Add remote repository", "Remote Operations"),
    cmd("git push origin <branch>", "Push to remote repository", "Remote Operations"),
    cmd("git pull origin <branch>", "Pull from remote repository", "Remote Operations"),
    cmd("git fetch", "Download objects from remote", "Remote Operations"),
    cmd("git remote -v", "List remote repositories", "Remote Operations"),
    // Undoing Changes
    cmd("git reset HEAD <file>", "Unstage a file", "Undoing Changes"),
    cmd("git checkout -- <file>", "Discard changes in working directory", "Undoing Changes"),
    cmd("git revert <commit>", "Create new commit that undoes changes", "Undoing Changes"),
    cmd("git reset --hard HEAD", "Reset to last commit (dangerous)", "Undoing Changes"),
    cmd("git reset --soft HEAD~1", "Undo last commit, keep changes staged", "Undoing Changes"),
    // Information
    cmd("git diff", "Show unstaged changes", "Information"),
    cmd("git diff --staged", "Show staged changes", "Information"),
    cmd("git show <commit>", "Show commit details", "Information"),
    cmd("git blame <file>", "Show who changed what in a file", "Information"),
    cmd("git log --graph --oneline", "Show commit graph", "Information"),
    // Stashing
    cmd("git stash", "Stash current changes", "Stashing"),
    cmd("git stash list", "List all stashes", "Stashing"),
    cmd("git stash pop", "Apply and remove latest stash", "Stashing"),
    cmd("git stash apply", "Apply latest stash (keep it)", "Stashing"),
    cmd("git stash drop", "Remove latest stash", "Stashing"),
    // Tags
    cmd("git tag <name>", "Create a lightweight tag", "Tags"),
    cmd("git tag -a <name> -m \"message\"", "Create an annotated tag", "Tags"),
    cmd("git tag", "List all tags", "Tags"),
    cmd("git push origin --tags", "Push all tags to remote", "Tags"),
];

/// Distinct categories in first-appearance order
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for command in GIT_COMMANDS {
        if !seen.contains(&command.category) {
            seen.push(command.category);
        }
    }
    seen
}

/// Commands in `category`, or the whole catalog when `None`
pub fn filtered(category: Option<&str>) -> Vec<&'static GitCommand> {
    GIT_COMMANDS
        .iter()
        .filter(|command| category.map_or(true, |c| command.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_in_first_appearance_order() {
        assert_eq!(
            categories(),
            vec![
                "Getting Started",
                "Basic Commands",
                "Branching",
                "Remote Operations",
                "Undoing Changes",
                "Information",
                "Stashing",
                "Tags",
            ]
        );
    }

    #[test]
    fn test_filter_keeps_catalog_order() {
        let branching = filtered(Some("Branching"));
        assert_eq!(branching.len(), 6);
        assert_eq!(branching[0].command, "git branch");
        assert!(branching.iter().all(|c| c.category == "Branching"));
    }

    #[test]
    fn test_no_filter_returns_everything() {
        assert_eq!(filtered(None).len(), GIT_COMMANDS.len());
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(filtered(Some("Rebasing")).is_empty());
    }
}
