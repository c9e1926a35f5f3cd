//! Document construction with running page decoration.
//!
//! fpdf-style reports override `header()`/`footer()` on a document
//! subclass; here the same capability is a pair of render callbacks
//! configured on the builder and invoked by a page decorator every time a
//! page starts, so a page break automatically re-renders both.

use genpdf::error::{Error, ErrorKind};
use genpdf::{self, style, Element, Margins, Mm, PageDecorator, Position, Size};

use crate::fonts;

type PageElementFactory = dyn Fn(usize) -> Box<dyn Element>;

/// Builder for `genpdf::Document` instances with running header/footer.
#[derive(Default)]
pub struct DocumentBuilder {
    paper_size: Option<Size>,
    margins: Option<Margins>,
    header: Option<Box<PageElementFactory>>,
    footer: Option<ReservedFooter>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the paper size for the document.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the margins applied on every page before content is laid out.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Configures a header callback invoked with the page number for every
    /// page. The rendered height is subtracted from the content area.
    pub fn with_header<F, E>(mut self, header: F) -> Self
    where
        F: Fn(usize) -> E + 'static,
        E: Element + 'static,
    {
        self.header = Some(Box::new(move |page| Box::new(header(page))));
        self
    }

    /// Configures a footer callback with a fixed reserved height, invoked
    /// with the page number for every page.
    pub fn with_footer<F, E>(mut self, height: impl Into<Mm>, footer: F) -> Self
    where
        F: Fn(usize) -> E + 'static,
        E: Element + 'static,
    {
        self.footer = Some(ReservedFooter {
            height: height.into(),
            factory: Box::new(move |page| Box::new(footer(page))),
        });
        self
    }

    /// Builds the document with the crate's font family installed.
    pub fn build(self) -> Result<genpdf::Document, Error> {
        let font_family = fonts::default_font_family()?;
        let mut document = genpdf::Document::new(font_family);

        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }

        document.set_page_decorator(PageFrame::new(self.margins, self.header, self.footer));
        Ok(document)
    }
}

/// A footer factory together with the page height reserved for it.
struct ReservedFooter {
    height: Mm,
    factory: Box<PageElementFactory>,
}

/// Page decorator that applies margins and renders the running header and
/// footer, shrinking the content area accordingly.
struct PageFrame {
    page: usize,
    margins: Option<Margins>,
    header: Option<Box<PageElementFactory>>,
    footer: Option<ReservedFooter>,
}

impl PageFrame {
    fn new(
        margins: Option<Margins>,
        header: Option<Box<PageElementFactory>>,
        footer: Option<ReservedFooter>,
    ) -> Self {
        Self {
            page: 0,
            margins,
            header,
            footer,
        }
    }
}

impl PageDecorator for PageFrame {
    fn decorate_page<'a>(
        &mut self,
        context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        style: style::Style,
    ) -> Result<genpdf::render::Area<'a>, Error> {
        self.page += 1;

        if let Some(margins) = self.margins {
            area.add_margins(margins);
        }

        if let Some(header) = &self.header {
            let mut element = header(self.page);
            let rendered = element.render(context, area.clone(), style)?;
            area.add_offset(Position::new(0, rendered.size.height));
        }

        if let Some(footer) = &self.footer {
            let available = area.size().height;
            if footer.height > available {
                return Err(Error::new(
                    "Footer height exceeds available space",
                    ErrorKind::InvalidData,
                ));
            }

            let mut footer_area = area.clone();
            footer_area.add_offset(Position::new(0, available - footer.height));
            let mut element = (footer.factory)(self.page);
            let rendered = element.render(context, footer_area, style)?;
            if rendered.has_more {
                return Err(Error::new(
                    "Footer element does not fit into the reserved space",
                    ErrorKind::PageSizeExceeded,
                ));
            }

            area.set_height(available - footer.height);
        }

        Ok(area)
    }
}
