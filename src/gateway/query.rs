/// Sort direction for the single `order` clause a select supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn suffix(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// A typed select against one gateway table: all rows, optional embedded
/// related rows via foreign key, optional single equality filter, optional
/// single order clause. This is the entire query surface the dashboard needs;
/// anything richer belongs to the gateway, not here.
#[derive(Debug, Clone)]
pub struct Select {
    table: &'static str,
    embeds: Vec<String>,
    filter: Option<(&'static str, String)>,
    order: Option<(&'static str, Direction)>,
}

impl Select {
    pub fn from(table: &'static str) -> Self {
        Self {
            table,
            embeds: Vec::new(),
            filter: None,
            order: None,
        }
    }

    /// Embed related rows through the foreign key to `table`, projecting only
    /// the named columns.
    pub fn embed(mut self, table: &str, columns: &[&str]) -> Self {
        self.embeds.push(format!("{}({})", table, columns.join(",")));
        self
    }

    pub fn eq(mut self, field: &'static str, value: &str) -> Self {
        self.filter = Some((field, value.to_string()));
        self
    }

    pub fn order_asc(mut self, field: &'static str) -> Self {
        self.order = Some((field, Direction::Asc));
        self
    }

    pub fn order_desc(mut self, field: &'static str) -> Self {
        self.order = Some((field, Direction::Desc));
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn path(&self) -> String {
        format!("/rest/v1/{}", self.table)
    }

    /// Render the query string pairs in the gateway's dialect.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut select = String::from("*");
        for embed in &self.embeds {
            select.push(',');
            select.push_str(embed);
        }

        let mut pairs = vec![("select".to_string(), select)];
        if let Some((field, value)) = &self.filter {
            pairs.push((field.to_string(), format!("eq.{value}")));
        }
        if let Some((field, direction)) = &self.order {
            pairs.push((
                "order".to_string(),
                format!("{field}.{}", direction.suffix()),
            ));
        }
        pairs
    }
}
