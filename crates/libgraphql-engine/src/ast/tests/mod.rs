mod node_tests;
mod printer_tests;
mod with_new_children_tests;
