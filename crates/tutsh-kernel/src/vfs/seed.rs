//! The tutorial home directory every new session starts with.

use super::node::Node;
use super::tree::Tree;

const REPORT_TXT: &str = "This is a sample report file.\nIt contains some important information.";
const NOTES_MD: &str = "# My Notes\n\n- Idea 1\n- Idea 2\n- Idea 3";
const README_TXT: &str = "Welcome to your simulated home directory!\n\nTry `ls -l` for more details.";

/// Build the seeded tree. Directories are stamped with `now`; files keep
/// their fixed dates and display sizes.
pub fn tutorial_tree(now: &str) -> Tree {
    let documents = Node::directory(now)
        .with_child(
            "report.txt",
            Node::file(REPORT_TXT, "Jul 25 10:00").with_size(60),
        )
        .with_child("notes.md", Node::file(NOTES_MD, "Jul 26 14:30").with_size(40));

    let my_blog = Node::directory(now)
        .with_child(
            "index.html",
            Node::file("<!DOCTYPE html>...", "Jul 20 09:00").with_size(200),
        )
        .with_child(
            "style.css",
            Node::file("body { color: blue; }", "Jul 20 09:05").with_size(50),
        )
        .with_child(
            "script.js",
            Node::file("// JavaScript code", "Jul 20 09:10").with_size(30),
        );

    let game_dev = Node::directory(now)
        .with_child(
            "main.py",
            Node::file("print(\"Hello Game!\")", "Jul 22 11:00").with_size(20),
        )
        .with_child("assets", Node::directory(now));

    let projects = Node::directory(now)
        .with_child("my_blog", my_blog)
        .with_child("game_dev", game_dev);

    let user = Node::directory(now)
        .with_child("documents", documents)
        .with_child("projects", projects)
        .with_child("downloads", Node::directory(now))
        .with_child(
            "README.txt",
            Node::file(README_TXT, "Jul 27 08:00").with_size(70),
        );

    let home = Node::directory(now).with_child("user", user);
    let root = Node::directory(now).with_child("home", home);

    // The root built above is always a directory.
    Tree::from_root(root).unwrap_or_else(|_| Tree::new(now))
}
