use crate::{DialectContext, SqlFragment};

pub struct Renderer<'a> {
    context: &'a dyn DialectContext,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub const fn new(context: &'a dyn DialectContext) -> Self {
        Self { context }
    }

    #[must_use]
    pub fn render(&self, fragments: &[SqlFragment]) -> String {
        let mut rendered = String::new();

        for fragment in fragments {
            rendered.push_str(&fragment.sql);
            rendered.push_str(self.context.statement_terminator());
            rendered.push('\n');
            self.push_batch_separator(&mut rendered);
        }

        rendered
    }

    fn push_batch_separator(&self, rendered: &mut String) {
        let separator = self.context.batch_separator();
        if separator.is_empty() {
            return;
        }

        rendered.push_str(separator);
        if !separator.ends_with('\n') {
            rendered.push('\n');
        }
    }
}
