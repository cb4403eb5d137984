mod tests_activities;
mod tests_child_workflows;
mod tests_cross_file;
mod tests_failures;
